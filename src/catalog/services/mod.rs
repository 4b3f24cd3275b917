mod cross_filter;
mod declaration_formatter;
mod dropdown_cycle;
mod project_validator;
mod version_comparator;

pub use cross_filter::{CrossFilterEngine, DependencyCounts, DependencyEntry};
pub use declaration_formatter::{BuildTool, DeclarationFormatter};
pub use dropdown_cycle::{DropdownCycle, DropdownLocks, DropdownView, DropdownViewModel};
pub use project_validator::{ProjectValidator, ValidatedCatalog, DEFAULT_PROJECT_NAME};
pub use version_comparator::VersionComparator;
