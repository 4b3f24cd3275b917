/// Console adapters writing user feedback to stderr
mod dropdown_presenter;
mod progress_reporter;

pub use dropdown_presenter::{SilentDropdownPresenter, StderrDropdownPresenter};
pub use progress_reporter::StderrProgressReporter;
