/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod catalog_reader;
pub mod dropdown_presenter;
pub mod formatter;
pub mod history_lister;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use dropdown_presenter::DropdownPresenter;
pub use formatter::CatalogFormatter;
pub use history_lister::{HistoryEntry, HistoryLister};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
