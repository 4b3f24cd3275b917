use crate::shared::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One selectable catalogue snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Location handed to the [`CatalogReader`](super::CatalogReader)
    pub location: String,
    /// Human label, `YYYY-MM-DD HH:MM:SS` for timestamped snapshots
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<NaiveDateTime>,
    pub is_latest: bool,
    pub is_default: bool,
}

impl HistoryEntry {
    pub fn default_source(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            label: "Current".to_string(),
            captured_at: None,
            is_latest: false,
            is_default: true,
        }
    }
}

/// HistoryLister port for discovering historical catalogue snapshots
pub trait HistoryLister {
    /// Lists the available snapshots, newest first, followed by the default
    /// document.
    ///
    /// # Errors
    /// Returns an error if the history directory exists but cannot be read
    fn list_history(&self) -> Result<Vec<HistoryEntry>>;
}
