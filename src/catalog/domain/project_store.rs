use super::dimension::Dimension;
use super::project::Project;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary numbers about a loaded catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_projects: usize,
    pub with_dependencies: usize,
    pub without_dependencies: usize,
    pub total_dependencies: usize,
    /// Distinct non-null values per dimension, in first-seen order.
    pub versions: BTreeMap<Dimension, Vec<String>>,
}

/// Ordered set of normalized projects for the current session.
///
/// Insertion order is the source document order. The store is only ever
/// replaced as a whole.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole store.
    pub fn initialize(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn reset(&mut self) {
        self.projects.clear();
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        if name.is_empty() {
            return None;
        }
        self.projects.iter().find(|p| p.name() == name)
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total_projects: self.projects.len(),
            ..CatalogStats::default()
        };

        for project in &self.projects {
            let count = project.dependencies().len();
            if count > 0 {
                stats.with_dependencies += 1;
                stats.total_dependencies += count;
            } else {
                stats.without_dependencies += 1;
            }

            for dimension in Dimension::ALL {
                if let Some(value) = project.requirements().get(dimension) {
                    let seen = stats.versions.entry(dimension).or_default();
                    if !seen.iter().any(|v| v == value) {
                        seen.push(value.to_string());
                    }
                }
            }
        }

        stats
    }
}

impl From<Vec<Project>> for ProjectStore {
    fn from(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}
