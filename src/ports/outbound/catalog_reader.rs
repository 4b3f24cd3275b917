use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// CatalogReader port for loading the raw catalogue document
///
/// Implementations fetch the document from a location (file path or URL),
/// strip comment lines and return one JSON value per project record. Record
/// validation is not their concern.
///
/// # Async Support
/// Methods are async so HTTP sources can retry without blocking.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Reads the project records stored at `location`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The location cannot be read (missing file, HTTP failure after retries)
    /// - The document is not valid JSON once comments are stripped
    /// - The document is neither an array nor a single project object
    /// - The document is an `{ "error": true, "message": ... }` object
    async fn read_catalog(&self, location: &str) -> Result<Vec<Value>>;
}
