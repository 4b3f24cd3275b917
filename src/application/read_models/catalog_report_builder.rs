use super::catalog_report::{CatalogReport, ProjectView, ReportMetadata};
use crate::application::session::CatalogSession;
use crate::catalog::domain::FilterSelections;
use crate::catalog::services::DropdownViewModel;
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a [`CatalogReport`] from the current session state.
pub struct CatalogReportBuilder;

impl CatalogReportBuilder {
    pub fn build(
        session: &CatalogSession,
        requested: &FilterSelections,
        requested_combination_valid: bool,
        dropdowns: &DropdownViewModel,
    ) -> CatalogReport {
        let search_term = Some(session.search_term()).filter(|t| !t.trim().is_empty());
        let projects = session
            .filtered_projects()
            .into_iter()
            .map(|p| ProjectView {
                name: p.name().to_string(),
                requirements: p.requirements().clone(),
                dependency_count: p.dependencies().len(),
            })
            .collect();

        CatalogReport {
            metadata: ReportMetadata {
                source: session.source().unwrap_or_default(),
                generated_at: Utc::now().to_rfc3339(),
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
            requested_filters: requested.labels(),
            requested_combination_valid,
            active_filters: session.selections().labels(),
            search_term,
            dropdowns: dropdowns.views.clone(),
            counts: session.dependency_counts(),
            projects,
            dependencies: session.filtered_dependencies(),
            stats: session.stats(),
        }
    }
}
