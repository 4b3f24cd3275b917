use super::dependency::Dependency;
use super::dimension::{Dimension, NONE_LABEL};
use super::filter_state::FilterSelections;
use serde::Serialize;

/// Version requirements of a project, one slot per tracked dimension.
///
/// `None` means the dimension is absent for the project. It is never the
/// `"None"` display label; that mapping happens only when options are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    java: Option<String>,
    kotlin: Option<String>,
    gradle: Option<String>,
    spring_boot: Option<String>,
}

impl Requirements {
    pub fn new(
        java: Option<String>,
        kotlin: Option<String>,
        gradle: Option<String>,
        spring_boot: Option<String>,
    ) -> Self {
        Self {
            java,
            kotlin,
            gradle,
            spring_boot,
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Java => self.java.as_deref(),
            Dimension::Kotlin => self.kotlin.as_deref(),
            Dimension::Gradle => self.gradle.as_deref(),
            Dimension::SpringBoot => self.spring_boot.as_deref(),
        }
    }

    /// Per-dimension match rule shared by every filtering operation.
    ///
    /// Selecting the sentinel on a dimension that supports it matches
    /// projects where the dimension is absent.
    pub fn matches(&self, dimension: Dimension, selected: &str) -> bool {
        let actual = self.get(dimension);
        if selected == NONE_LABEL && dimension.supports_none_sentinel() {
            return actual.is_none();
        }
        actual == Some(selected)
    }

    /// True when every active selection matches.
    pub fn matches_all(&self, selections: &FilterSelections) -> bool {
        selections
            .active()
            .all(|(dimension, value)| self.matches(dimension, value))
    }

    /// Same as [`Requirements::matches_all`] but ignoring one dimension.
    pub fn matches_all_except(&self, selections: &FilterSelections, skip: Dimension) -> bool {
        selections
            .active()
            .filter(|(dimension, _)| *dimension != skip)
            .all(|(dimension, value)| self.matches(dimension, value))
    }
}

/// Project value object: a name, its requirements and its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    requirements: Requirements,
    dependencies: Vec<Dependency>,
}

impl Project {
    pub(crate) fn new(name: String, requirements: Requirements, dependencies: Vec<Dependency>) -> Self {
        Self {
            name,
            requirements,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}
