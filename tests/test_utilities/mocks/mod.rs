/// Mock implementations for testing
mod mock_catalog_reader;
mod mock_dropdown_presenter;
mod mock_history_lister;
mod mock_progress_reporter;

pub use mock_catalog_reader::MockCatalogReader;
pub use mock_dropdown_presenter::MockDropdownPresenter;
pub use mock_history_lister::MockHistoryLister;
pub use mock_progress_reporter::MockProgressReporter;
