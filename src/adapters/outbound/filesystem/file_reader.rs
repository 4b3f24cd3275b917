use crate::adapters::outbound::parsing::parse_catalog_document;
use crate::ports::outbound::{CatalogReader, HistoryEntry, HistoryLister};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum catalogue file size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const SNAPSHOT_PREFIX: &str = "dependencies_";
const SNAPSHOT_SUFFIX: &str = ".json";
const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const SNAPSHOT_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// FileSystemReader adapter for catalogue documents on disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after checking it is a regular, reasonably sized file
    /// and not a symbolic link.
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        let metadata = fs::symlink_metadata(path).map_err(|e| read_error(e.to_string()))?;

        if metadata.file_type().is_symlink() {
            return Err(read_error(
                "Symbolic links are not followed for catalogue documents".to_string(),
            )
            .into());
        }
        if !metadata.is_file() {
            return Err(read_error("Not a regular file".to_string()).into());
        }
        if metadata.len() > MAX_FILE_SIZE {
            return Err(read_error(format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_FILE_SIZE
            ))
            .into());
        }

        fs::read_to_string(path).map_err(|e| read_error(e.to_string()).into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogReader for FileSystemReader {
    async fn read_catalog(&self, location: &str) -> Result<Vec<Value>> {
        let path = Path::new(location);
        if !path.exists() {
            return Err(CatalogError::DataLoadError {
                source_path: location.to_string(),
                details: "File not found".to_string(),
                suggestion: "Check that the data file exists and is accessible, or pass --source"
                    .to_string(),
            }
            .into());
        }

        let text = self.safe_read_file(path)?;
        parse_catalog_document(&text, location)
    }
}

/// FileSystemHistoryLister adapter listing timestamped snapshots
///
/// Snapshots are files named `dependencies_YYYYMMDD_HHMMSS.json` inside the
/// history directory. The configured default document is always offered
/// last.
pub struct FileSystemHistoryLister {
    history_dir: PathBuf,
    default_source: String,
    enabled: bool,
}

impl FileSystemHistoryLister {
    pub fn new(history_dir: PathBuf, default_source: impl Into<String>, enabled: bool) -> Self {
        Self {
            history_dir,
            default_source: default_source.into(),
            enabled,
        }
    }

    fn snapshot_timestamp(file_name: &str) -> Option<NaiveDateTime> {
        let stamp = file_name
            .strip_prefix(SNAPSHOT_PREFIX)?
            .strip_suffix(SNAPSHOT_SUFFIX)?;
        NaiveDateTime::parse_from_str(stamp, SNAPSHOT_TIMESTAMP_FORMAT).ok()
    }
}

impl HistoryLister for FileSystemHistoryLister {
    fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        let default_entry = HistoryEntry::default_source(self.default_source.clone());
        if !self.enabled {
            return Ok(vec![default_entry]);
        }
        if !self.history_dir.is_dir() {
            tracing::debug!(dir = %self.history_dir.display(), "History directory missing");
            return Ok(vec![default_entry]);
        }

        let dir = fs::read_dir(&self.history_dir).map_err(|e| CatalogError::HistoryUnavailable {
            path: self.history_dir.clone(),
            details: e.to_string(),
        })?;

        let mut snapshots: Vec<HistoryEntry> = dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                let captured_at = Self::snapshot_timestamp(&file_name)?;
                Some(HistoryEntry {
                    location: entry.path().to_string_lossy().into_owned(),
                    label: captured_at.format(SNAPSHOT_LABEL_FORMAT).to_string(),
                    captured_at: Some(captured_at),
                    is_latest: false,
                    is_default: false,
                })
            })
            .collect();

        snapshots.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        if let Some(newest) = snapshots.first_mut() {
            newest.is_latest = true;
        }
        tracing::debug!(count = snapshots.len(), "Discovered history snapshots");

        snapshots.push(default_entry);
        Ok(snapshots)
    }
}
