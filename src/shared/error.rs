use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish an incompatible filter
/// combination from a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the catalogue was loaded and rendered
    Success = 0,
    /// The requested filter combination matches no project
    IncompatibleFilters = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (load failure, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleFilters => write!(f, "Incompatible Filters (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Error taxonomy used to tag log records and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed project or dependency, invalid filter key
    Validation,
    /// Source document is not valid JSON after comment stripping
    Parse,
    /// Fetch failure or wrong top-level document shape
    DataLoad,
    /// Engine-level problem while computing options or combinations
    Filter,
    /// Anything unexpected
    Runtime,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Parse => "parse",
            ErrorKind::DataLoad => "data_load",
            ErrorKind::Filter => "filter",
            ErrorKind::Runtime => "runtime",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-specific errors for catalogue loading and filtering.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid project record: {reason}\n\n💡 Hint: Each catalogue entry must be a non-empty JSON object")]
    InvalidProject { reason: String },

    #[error("Invalid filter key: {key}\n\n💡 Hint: Use one of java, kotlin, gradle, spring_boot (or spring)")]
    InvalidFilterKey { key: String },

    #[error("Failed to parse catalogue document: {source_path}\nDetails: {details}\n\n💡 Hint: Please verify the JSON syntax of the dependencies file")]
    DocumentParseError { source_path: String, details: String },

    #[error("Failed to load dependencies from {source_path}\nDetails: {details}\n\n💡 Hint: {suggestion}")]
    DataLoadError {
        source_path: String,
        details: String,
        suggestion: String,
    },

    #[error("The catalogue source reported an error: {message}\n\n💡 Hint: Regenerate the dependencies file and try again")]
    SourceError { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("History directory is not available: {path}\nDetails: {details}\n\n💡 Hint: Set history_dir in the config file or pass --source explicitly")]
    HistoryUnavailable { path: PathBuf, details: String },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CatalogError {
    /// Maps the error into the logging taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidProject { .. }
            | CatalogError::InvalidFilterKey { .. }
            | CatalogError::Validation { .. } => ErrorKind::Validation,
            CatalogError::DocumentParseError { .. } => ErrorKind::Parse,
            CatalogError::DataLoadError { .. }
            | CatalogError::SourceError { .. }
            | CatalogError::FileReadError { .. }
            | CatalogError::HistoryUnavailable { .. } => ErrorKind::DataLoad,
            CatalogError::FileWriteError { .. } => ErrorKind::Runtime,
        }
    }
}
