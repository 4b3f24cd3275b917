//! dep-catalog - Cross-filter explorer for JVM dependency catalogues
//!
//! This library loads a JSON catalogue of JVM projects (their Java, Kotlin,
//! Gradle and Spring Boot requirements plus their declared dependencies) and
//! answers cross-filter queries over it, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Projects, filter state, the cross-filter
//!   engine and the dropdown cycle
//! - **Application Layer** (`application`): Session state and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_catalog::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let use_case = LoadCatalogUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     ProjectValidator::new(VariableResolution::default()),
//! );
//! let loaded = use_case
//!     .execute(LoadRequest::new("data/dependencies.json"))
//!     .await?;
//!
//! let session = CatalogSession::new();
//! session.initialize(loaded.projects, &loaded.location);
//! session.update_filter("java", Some("17"));
//!
//! for entry in session.filtered_dependencies() {
//!     println!("{}", DeclarationFormatter::format(&entry.dependency, BuildTool::Gradle));
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        SilentDropdownPresenter, StderrDropdownPresenter, StderrProgressReporter,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemHistoryLister, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DeclarationListFormatter, JsonReportFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::{
        CachingCatalogReader, HttpCatalogClient, SourceCatalogReader,
    };
    pub use crate::application::dto::{LoadRequest, LoadResponse, OutputFormat, QueryRequest};
    pub use crate::application::read_models::CatalogReport;
    pub use crate::application::session::CatalogSession;
    pub use crate::application::use_cases::{
        ListHistoryUseCase, LoadCatalogUseCase, QueryCatalogUseCase,
    };
    pub use crate::catalog::domain::{
        Dependency, Dimension, FilterSelections, Project, Requirements, NONE_LABEL,
    };
    pub use crate::catalog::policies::VariableResolution;
    pub use crate::catalog::services::{
        BuildTool, CrossFilterEngine, DeclarationFormatter, DependencyEntry, ProjectValidator,
        VersionComparator,
    };
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogReader, DropdownPresenter, HistoryLister, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
