use crate::application::read_models::CatalogReport;
use crate::catalog::services::{BuildTool, DeclarationFormatter};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// DeclarationListFormatter adapter emitting copy-ready build declarations
///
/// One declaration per filtered dependency, in report order.
pub struct DeclarationListFormatter {
    tool: BuildTool,
}

impl DeclarationListFormatter {
    pub fn new(tool: BuildTool) -> Self {
        Self { tool }
    }
}

impl CatalogFormatter for DeclarationListFormatter {
    fn format(&self, report: &CatalogReport) -> Result<String> {
        Ok(DeclarationFormatter::format_all(
            report.dependencies.iter().map(|e| &e.dependency),
            self.tool,
        ))
    }
}
