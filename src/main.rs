use dep_catalog::adapters::outbound::console::{
    SilentDropdownPresenter, StderrDropdownPresenter, StderrProgressReporter,
};
use dep_catalog::adapters::outbound::filesystem::{FileSystemHistoryLister, FileSystemReader};
use dep_catalog::adapters::outbound::network::{
    CachingCatalogReader, HttpCatalogClient, SourceCatalogReader,
};
use dep_catalog::application::dto::{LoadRequest, OutputFormat, QueryRequest};
use dep_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_catalog::application::session::CatalogSession;
use dep_catalog::application::use_cases::{
    ListHistoryUseCase, LoadCatalogUseCase, QueryCatalogUseCase,
};
use dep_catalog::catalog::policies::VariableResolution;
use dep_catalog::catalog::services::ProjectValidator;
use dep_catalog::cli::Args;
use dep_catalog::config::{self, CatalogSettings, SettingsOverrides};
use dep_catalog::ports::outbound::{DropdownPresenter, HistoryEntry, ProgressReporter};
use dep_catalog::shared::error::{CatalogError, ErrorKind, ExitCode};
use dep_catalog::shared::logging::init_logging;
use dep_catalog::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            let kind = e
                .downcast_ref::<CatalogError>()
                .map_or(ErrorKind::Runtime, CatalogError::kind);
            tracing::error!(%kind, "Run failed");

            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = CatalogSettings::resolve(
        config_file,
        SettingsOverrides {
            source: args.source.clone(),
            format: args.format,
        },
    )?;
    tracing::debug!(?settings, "Effective settings");

    let progress_reporter = StderrProgressReporter::new();
    let output_presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));

    let history = ListHistoryUseCase::new(
        FileSystemHistoryLister::new(
            settings.history_dir.clone(),
            settings.source.clone(),
            settings.history_enabled,
        ),
        &progress_reporter,
    );

    if args.list_history {
        let entries = history.execute()?;
        output_presenter.present(&render_history(&entries, settings.format)?)?;
        return Ok(ExitCode::Success);
    }

    let location = match args.history.as_deref() {
        Some(label) => history.select(label)?.location,
        None => settings.source.clone(),
    };

    // Create adapters (Dependency Injection)
    let http_client = HttpCatalogClient::new(settings.retry_attempts, settings.retry_delay)?;
    let catalog_reader = CachingCatalogReader::new(
        SourceCatalogReader::new(FileSystemReader::new(), http_client),
        settings.cache_ttl,
    );
    let validator = ProjectValidator::new(VariableResolution::new(settings.known_variables.clone()));

    let load_use_case = LoadCatalogUseCase::new(catalog_reader, &progress_reporter, validator);
    let loaded = load_use_case.execute(LoadRequest::new(location)).await?;

    let session = CatalogSession::new();
    session.initialize(loaded.projects, &loaded.location);

    let stderr_dropdowns = StderrDropdownPresenter::new();
    let dropdown_presenter: &dyn DropdownPresenter = if args.show_filters {
        &stderr_dropdowns
    } else {
        &SilentDropdownPresenter
    };

    let query_use_case = QueryCatalogUseCase::new(&session, dropdown_presenter, &progress_reporter);
    let report = query_use_case.execute(QueryRequest::new(args.filters(), args.search.clone()))?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    output_presenter.present(&formatter.format(&report)?)?;

    if report.requested_combination_valid {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::IncompatibleFilters)
    }
}

fn render_history(entries: &[HistoryEntry], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }

    Ok(entries
        .iter()
        .map(|entry| {
            let marker = if entry.is_latest {
                " (latest)"
            } else if entry.is_default {
                " (default)"
            } else {
                ""
            };
            format!("{}\t{}{}", entry.label, entry.location, marker)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_history_text() {
        let entries = vec![
            HistoryEntry {
                location: "data/dependencies_20240312_180501.json".to_string(),
                label: "2024-03-12 18:05:01".to_string(),
                captured_at: None,
                is_latest: true,
                is_default: false,
            },
            HistoryEntry::default_source("data/dependencies.json"),
        ];
        let text = render_history(&entries, OutputFormat::Markdown).unwrap();
        assert_eq!(
            text,
            "2024-03-12 18:05:01\tdata/dependencies_20240312_180501.json (latest)\nCurrent\tdata/dependencies.json (default)"
        );
    }

    #[test]
    fn test_render_history_json() {
        let entries = vec![HistoryEntry::default_source("data/dependencies.json")];
        let json = render_history(&entries, OutputFormat::Json).unwrap();
        assert!(json.contains("\"label\": \"Current\""));
        assert!(json.contains("\"is_default\": true"));
    }
}
