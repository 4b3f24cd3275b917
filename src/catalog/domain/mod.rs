pub mod dependency;
pub mod dimension;
pub mod filter_state;
pub mod project;
pub mod project_store;

pub use dependency::{Dependency, DependencyKey, DependencyVersion, VariableRef};
pub use dimension::{Dimension, NONE_LABEL};
pub use filter_state::{FilterSelections, FilterState};
pub use project::{Project, Requirements};
pub use project_store::{CatalogStats, ProjectStore};
