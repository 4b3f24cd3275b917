use crate::adapters::outbound::formatters::{
    DeclarationListFormatter, JsonReportFormatter, MarkdownFormatter,
};
use crate::application::dto::OutputFormat;
use crate::catalog::services::BuildTool;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating catalogue report formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer as it maps an application concern onto infrastructure.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_catalog::application::dto::OutputFormat;
    /// use dep_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Gradle => Box::new(DeclarationListFormatter::new(BuildTool::Gradle)),
            OutputFormat::Maven => Box::new(DeclarationListFormatter::new(BuildTool::Maven)),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Gradle => "📝 Generating Gradle declarations...",
            OutputFormat::Maven => "📝 Generating Maven declarations...",
        }
    }
}
