use crate::application::read_models::CatalogReport;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter rendering the whole report as pretty JSON.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonReportFormatter {
    fn format(&self, report: &CatalogReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
