use crate::application::dto::{LoadRequest, LoadResponse};
use crate::catalog::services::ProjectValidator;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::Result;

/// LoadCatalogUseCase - Reads and validates a catalogue document
///
/// # Type Parameters
/// * `R` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadCatalogUseCase<R, PR> {
    catalog_reader: R,
    progress_reporter: PR,
    validator: ProjectValidator,
}

impl<R, PR> LoadCatalogUseCase<R, PR>
where
    R: CatalogReader,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: R, progress_reporter: PR, validator: ProjectValidator) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
            validator,
        }
    }

    /// Executes the load
    ///
    /// Invalid project records are skipped and counted; only failures to
    /// obtain the document at all are returned as errors.
    pub async fn execute(&self, request: LoadRequest) -> Result<LoadResponse> {
        self.progress_reporter
            .report(&format!("📖 Loading catalogue from: {}", request.location));

        let records = self.catalog_reader.read_catalog(&request.location).await?;
        let catalog = self.validator.validate_all(&records);

        if catalog.skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} invalid project record(s).",
                catalog.skipped
            ));
        }

        let response = LoadResponse::new(request.location, catalog.projects, catalog.skipped);
        if response.projects.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The catalogue contains no projects.");
        }

        tracing::info!(
            source = %response.location,
            projects = response.projects.len(),
            skipped = response.skipped,
            dependencies = response.dependency_count(),
            "Catalogue loaded"
        );
        self.progress_reporter.report(&format!(
            "✅ Loaded {} project(s) with {} dependency declaration(s)",
            response.projects.len(),
            response.dependency_count()
        ));

        Ok(response)
    }
}
