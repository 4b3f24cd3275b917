use crate::catalog::domain::Project;

/// Outcome of loading a catalogue document.
#[derive(Debug, Clone)]
pub struct LoadResponse {
    pub location: String,
    pub projects: Vec<Project>,
    /// Records rejected by validation
    pub skipped: usize,
}

impl LoadResponse {
    pub fn new(location: String, projects: Vec<Project>, skipped: usize) -> Self {
        Self {
            location,
            projects,
            skipped,
        }
    }

    pub fn dependency_count(&self) -> usize {
        self.projects.iter().map(|p| p.dependencies().len()).sum()
    }
}
