use crate::application::dto::QueryRequest;
use crate::application::read_models::{CatalogReport, CatalogReportBuilder};
use crate::application::session::CatalogSession;
use crate::ports::outbound::{DropdownPresenter, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// QueryCatalogUseCase - Applies filters to a loaded session and reports
///
/// The requested selections are applied together, checked for
/// compatibility, and then settled by one dropdown cycle, the same sequence
/// a user produces by picking values and letting the dropdowns update.
///
/// # Type Parameters
/// * `DP` - DropdownPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryCatalogUseCase<'s, DP, PR> {
    session: &'s CatalogSession,
    dropdown_presenter: DP,
    progress_reporter: PR,
}

impl<'s, DP, PR> QueryCatalogUseCase<'s, DP, PR>
where
    DP: DropdownPresenter,
    PR: ProgressReporter,
{
    pub fn new(session: &'s CatalogSession, dropdown_presenter: DP, progress_reporter: PR) -> Self {
        Self {
            session,
            dropdown_presenter,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: QueryRequest) -> Result<CatalogReport> {
        self.session.clear_filters();
        for (dimension, value) in &request.filters {
            if !self.session.update_filter(dimension.key(), Some(value)) {
                return Err(CatalogError::InvalidFilterKey {
                    key: dimension.key().to_string(),
                }
                .into());
            }
        }
        match request.search_term.as_deref() {
            Some(term) => self.session.set_search_term(term),
            None => self.session.clear_search(),
        }

        let requested = self.session.selections();
        let requested_valid = self.session.is_combination_valid();
        if !requested_valid {
            self.progress_reporter.report_error(&format!(
                "⚠️  No project matches the combination: {}",
                requested.labels().join(", ")
            ));
        }

        let dropdowns = self
            .session
            .update_all_dropdowns(&self.dropdown_presenter)
            .unwrap_or_else(|| self.session.dropdown_snapshot());

        let report = CatalogReportBuilder::build(self.session, &requested, requested_valid, &dropdowns);
        for dimension in report.reset_filters() {
            self.progress_reporter
                .report_error(&format!("↺ {} filter reset: no compatible projects", dimension));
        }
        self.progress_reporter.report_completion(&format!(
            "🔎 {} project(s), {} dependency entries shown ({} total, {} unique)",
            report.projects.len(),
            report.dependencies.len(),
            report.counts.total_count,
            report.counts.unique_count
        ));

        Ok(report)
    }
}
