use crate::ports::outbound::{HistoryEntry, HistoryLister, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Label that selects the newest snapshot.
const LATEST: &str = "latest";

/// ListHistoryUseCase - Lists catalogue snapshots and resolves a selection
///
/// # Type Parameters
/// * `HL` - HistoryLister implementation
/// * `PR` - ProgressReporter implementation
pub struct ListHistoryUseCase<HL, PR> {
    history_lister: HL,
    progress_reporter: PR,
}

impl<HL, PR> ListHistoryUseCase<HL, PR>
where
    HL: HistoryLister,
    PR: ProgressReporter,
{
    pub fn new(history_lister: HL, progress_reporter: PR) -> Self {
        Self {
            history_lister,
            progress_reporter,
        }
    }

    pub fn execute(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.history_lister.list_history()?;
        let snapshots = entries.iter().filter(|e| !e.is_default).count();
        self.progress_reporter
            .report(&format!("🗂  Found {} historical snapshot(s)", snapshots));
        Ok(entries)
    }

    /// Finds the snapshot whose label matches `label`
    ///
    /// `"latest"` picks the newest snapshot, falling back to the default
    /// document when there are none.
    pub fn select(&self, label: &str) -> Result<HistoryEntry> {
        let entries = self.execute()?;
        let wanted = label.trim();

        let found = if wanted.eq_ignore_ascii_case(LATEST) {
            entries
                .iter()
                .find(|e| e.is_latest)
                .or_else(|| entries.iter().find(|e| e.is_default))
        } else {
            entries.iter().find(|e| e.label == wanted)
        };

        match found {
            Some(entry) => {
                tracing::debug!(label = %entry.label, location = %entry.location, "History snapshot selected");
                Ok(entry.clone())
            }
            None => {
                let available: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
                Err(CatalogError::Validation {
                    message: format!(
                        "Unknown history snapshot '{}'. Available: {}",
                        wanted,
                        available.join(", ")
                    ),
                }
                .into())
            }
        }
    }
}
