use crate::application::read_models::CatalogReport;
use crate::shared::Result;

/// CatalogFormatter port for rendering a catalogue report
///
/// Implementations exist for JSON, Markdown and build-tool declaration
/// listings.
pub trait CatalogFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &CatalogReport) -> Result<String>;
}
