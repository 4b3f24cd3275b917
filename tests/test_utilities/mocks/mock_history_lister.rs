use dep_catalog::ports::outbound::HistoryEntry;
use dep_catalog::prelude::*;

/// Mock HistoryLister with a fixed snapshot list
pub struct MockHistoryLister {
    pub entries: Vec<HistoryEntry>,
}

impl MockHistoryLister {
    /// Snapshots are given newest first, as labels `YYYY-MM-DD HH:MM:SS`.
    pub fn new(labels: &[&str], default_source: &str) -> Self {
        let mut entries: Vec<HistoryEntry> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| HistoryEntry {
                location: format!("snapshots/{}.json", label.replace([' ', ':', '-'], "")),
                label: label.to_string(),
                captured_at: None,
                is_latest: i == 0,
                is_default: false,
            })
            .collect();
        entries.push(HistoryEntry::default_source(default_source));
        Self { entries }
    }
}

impl HistoryLister for MockHistoryLister {
    fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}
