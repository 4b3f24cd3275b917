use crate::catalog::domain::{
    CatalogStats, Dimension, FilterSelections, FilterState, Project, ProjectStore,
};
use crate::catalog::services::{
    CrossFilterEngine, DependencyCounts, DependencyEntry, DropdownCycle, DropdownLocks,
    DropdownViewModel,
};
use crate::ports::outbound::DropdownPresenter;
use crate::shared::error::ErrorKind;
use std::cell::{Cell, RefCell};

/// CatalogSession - Session state for one user browsing one catalogue
///
/// Owns the project store, the filter state, the dropdown locks and the
/// re-entrancy guard of the dropdown cycle. All methods take `&self`; the
/// state lives behind `RefCell`/`Cell` so presenters can call back into the
/// session while a cycle is rendering.
///
/// The session is single-threaded and not `Sync`.
#[derive(Debug, Default)]
pub struct CatalogSession {
    store: RefCell<ProjectStore>,
    filters: RefCell<FilterState>,
    locks: Cell<DropdownLocks>,
    cycle_running: Cell<bool>,
    source: RefCell<Option<String>>,
}

/// Clears the cycle flag even if a presenter panics.
struct CycleGuard<'a>(&'a Cell<bool>);

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly loaded catalogue
    ///
    /// The previous store, filters and locks are discarded first so nothing
    /// from an earlier load survives.
    pub fn initialize(&self, projects: Vec<Project>, source: &str) {
        self.reset();
        tracing::info!(source, projects = projects.len(), "Initializing catalogue session");
        self.store.borrow_mut().initialize(projects);
        *self.source.borrow_mut() = Some(source.to_string());
    }

    pub fn reset(&self) {
        self.store.borrow_mut().reset();
        *self.filters.borrow_mut() = FilterState::new();
        self.locks.set(DropdownLocks::default());
        *self.source.borrow_mut() = None;
    }

    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    pub fn project_count(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn stats(&self) -> CatalogStats {
        self.store.borrow().stats()
    }

    pub fn project_by_name(&self, name: &str) -> Option<Project> {
        self.store.borrow().project_by_name(name).cloned()
    }

    pub fn selections(&self) -> FilterSelections {
        self.filters.borrow().selections().clone()
    }

    pub fn search_term(&self) -> String {
        self.filters.borrow().search_term().to_string()
    }

    pub fn locks(&self) -> DropdownLocks {
        self.locks.get()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.borrow().has_active_filters()
    }

    /// Sets or clears one filter
    ///
    /// Returns false for unknown keys and for dimensions currently locked by
    /// the dropdown cycle.
    pub fn update_filter(&self, key: &str, value: Option<&str>) -> bool {
        if let Ok(dimension) = key.parse::<Dimension>() {
            if self.locks.get().is_locked(dimension) {
                tracing::warn!(
                    kind = %ErrorKind::Validation,
                    %dimension,
                    "Ignoring change to a locked filter; clear all filters to unlock it"
                );
                return false;
            }
        }
        self.filters.borrow_mut().update_filter(key, value)
    }

    /// Clears every filter and releases every lock. The search term stays.
    pub fn clear_filters(&self) {
        self.filters.borrow_mut().reset_filters();
        self.locks.set(DropdownLocks::default());
    }

    pub fn set_search_term(&self, term: &str) {
        self.filters.borrow_mut().set_search_term(term);
    }

    pub fn clear_search(&self) {
        self.filters.borrow_mut().clear_search();
    }

    /// Runs one dropdown cycle and hands the result to `presenter`
    ///
    /// Selections cleared as incompatible are removed from the filter state
    /// and the new locks are stored before the presenter is called.
    /// Auto-selected singletons live only in the view model and the locks;
    /// they are implied by the user's choices and never enter the filter
    /// state. Returns `None` when a cycle is already running; that nested
    /// call changes nothing.
    pub fn update_all_dropdowns(&self, presenter: &dyn DropdownPresenter) -> Option<DropdownViewModel> {
        if self.cycle_running.replace(true) {
            tracing::debug!("Dropdown cycle already running; ignoring nested update");
            return None;
        }
        let _guard = CycleGuard(&self.cycle_running);

        let model = self.dropdown_snapshot();
        {
            let mut filters = self.filters.borrow_mut();
            for dimension in model.reset_dimensions() {
                filters.set_selection(dimension, None);
            }
        }
        self.locks.set(model.locks);

        for dimension in model.reset_dimensions() {
            tracing::debug!(%dimension, "Selection reset by dropdown cycle");
        }
        presenter.render(&model);

        Some(model)
    }

    /// Applies a filter change and, if accepted, runs the dropdown cycle.
    pub fn apply_filter_change(
        &self,
        key: &str,
        value: Option<&str>,
        presenter: &dyn DropdownPresenter,
    ) -> Option<DropdownViewModel> {
        if !self.update_filter(key, value) {
            return None;
        }
        self.update_all_dropdowns(presenter)
    }

    /// What the next dropdown cycle would produce, without applying it.
    ///
    /// Locks are derived afresh from the user's selections, so a dimension
    /// stays locked only while those selections force it to one value.
    pub fn dropdown_snapshot(&self) -> DropdownViewModel {
        let store = self.store.borrow();
        let selections = self.selections();
        DropdownCycle::recompute(store.projects(), &selections, &DropdownLocks::default())
    }

    pub fn compatible_options(&self, dimension: Dimension) -> Vec<String> {
        let store = self.store.borrow();
        CrossFilterEngine::compatible_options(store.projects(), dimension, &self.selections())
    }

    pub fn is_combination_valid(&self) -> bool {
        let store = self.store.borrow();
        CrossFilterEngine::validate_filter_combination(store.projects(), &self.selections())
    }

    pub fn filtered_projects(&self) -> Vec<Project> {
        let store = self.store.borrow();
        let filters = self.filters.borrow();
        CrossFilterEngine::filtered_projects(store.projects(), filters.selections(), filters.search_term())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn filtered_dependencies(&self) -> Vec<DependencyEntry> {
        let store = self.store.borrow();
        let filters = self.filters.borrow();
        CrossFilterEngine::filtered_dependencies(
            store.projects(),
            filters.selections(),
            filters.search_term(),
        )
    }

    pub fn dependency_counts(&self) -> DependencyCounts {
        let store = self.store.borrow();
        let filters = self.filters.borrow();
        CrossFilterEngine::dependency_counts(store.projects(), filters.selections(), filters.search_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::policies::VariableResolution;
    use crate::catalog::services::ProjectValidator;
    use crate::catalog::domain::NONE_LABEL;
    use serde_json::json;
    use std::rc::Rc;

    struct RecordingPresenter {
        renders: Cell<usize>,
    }

    impl DropdownPresenter for RecordingPresenter {
        fn render(&self, _model: &DropdownViewModel) {
            self.renders.set(self.renders.get() + 1);
        }
    }

    /// Simulates a UI whose rendering fires a change event back into the session.
    struct ReentrantPresenter {
        session: Rc<CatalogSession>,
        nested_results: RefCell<Vec<bool>>,
    }

    impl DropdownPresenter for ReentrantPresenter {
        fn render(&self, _model: &DropdownViewModel) {
            let nested = self.session.update_all_dropdowns(self);
            self.nested_results.borrow_mut().push(nested.is_none());
        }
    }

    fn projects() -> Vec<Project> {
        let validator = ProjectValidator::new(VariableResolution::default());
        let raw = json!([
            {
                "project": "billing",
                "requirements": { "java": "11", "kotlin": null, "gradle": "7.6", "spring_boot": "2.6.15" },
                "dependencies": [ { "group": "g", "name": "a", "version": "1.0" } ]
            },
            {
                "project": "orders",
                "requirements": { "java": "17", "kotlin": "1.9.10", "gradle": "8.5", "spring_boot": "3.1.0" },
                "dependencies": [ { "group": "g", "name": "a", "version": "1.0" }, { "group": "g", "name": "b", "version": "2.0" } ]
            }
        ]);
        raw.as_array()
            .unwrap()
            .iter()
            .map(|r| validator.validate(r).unwrap())
            .collect()
    }

    fn presenter() -> RecordingPresenter {
        RecordingPresenter {
            renders: Cell::new(0),
        }
    }

    #[test]
    fn test_initialize_resets_previous_state() {
        let session = CatalogSession::new();
        session.initialize(projects(), "first.json");
        session.update_filter("java", Some("17"));
        session.set_search_term("a");

        session.initialize(projects(), "second.json");
        assert!(!session.has_active_filters());
        assert_eq!(session.search_term(), "");
        assert_eq!(session.source().as_deref(), Some("second.json"));
        assert_eq!(session.project_count(), 2);
    }

    #[test]
    fn test_cycle_locks_singletons_without_selecting_them() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        let presenter = presenter();

        let model = session
            .apply_filter_change("java", Some("11"), &presenter)
            .unwrap();
        assert_eq!(presenter.renders.get(), 1);
        assert_eq!(model.selections.get(Dimension::Kotlin), Some(NONE_LABEL));
        assert_eq!(model.view(Dimension::Gradle).selected.as_deref(), Some("7.6"));
        assert!(session.locks().is_locked(Dimension::SpringBoot));
        // Only the user's choice is part of the filter state
        assert_eq!(session.selections().labels(), vec!["Java: 11"]);
        assert_eq!(session.selections().get(Dimension::Gradle), None);
    }

    #[test]
    fn test_cycle_clears_incompatible_selection_from_filter_state() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        session.update_filter("java", Some("11"));
        session.update_filter("gradle", Some("8.5"));

        let model = session.update_all_dropdowns(&presenter()).unwrap();
        assert_eq!(model.reset_dimensions().count(), 2);
        assert!(!session.has_active_filters());
    }

    #[test]
    fn test_shared_requirements_keep_unfiltered_dependencies_merged() {
        let validator = ProjectValidator::new(VariableResolution::default());
        let catalog = validator.validate_all(&[
            json!({
                "project": "P1",
                "requirements": { "java": "17", "kotlin": null, "gradle": "8.5", "spring_boot": "3.1.0" },
                "dependencies": [ { "group": "g", "name": "a", "version": "1.0" } ]
            }),
            json!({
                "project": "P2",
                "requirements": { "java": "17", "kotlin": "1.9.10", "gradle": "8.5", "spring_boot": null },
                "dependencies": [ { "group": "g", "name": "a", "version": "1.0" } ]
            }),
        ]);
        let session = CatalogSession::new();
        session.initialize(catalog.projects, "data.json");

        let model = session.update_all_dropdowns(&presenter()).unwrap();
        assert!(model.locks.is_locked(Dimension::Java));
        assert!(model.locks.is_locked(Dimension::Gradle));
        assert_eq!(model.view(Dimension::Java).selected.as_deref(), Some("17"));

        assert!(!session.has_active_filters());
        let entries = session.filtered_dependencies();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].dependency.projects(), ["P1", "P2"]);
        assert_eq!(session.dependency_counts().unique_count, 1);
    }

    #[test]
    fn test_locks_follow_the_user_selections() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        let presenter = presenter();
        session.apply_filter_change("java", Some("11"), &presenter);
        assert!(session.locks().is_locked(Dimension::Kotlin));

        session.apply_filter_change("java", None, &presenter);
        assert!(!session.locks().any());
    }

    #[test]
    fn test_locked_dimension_rejects_updates_until_clear() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        let presenter = presenter();
        session.apply_filter_change("java", Some("11"), &presenter);

        assert!(!session.update_filter("gradle", Some("8.5")));
        assert_eq!(session.selections().get(Dimension::Gradle), None);

        session.clear_filters();
        assert!(!session.locks().any());
        assert!(session.update_filter("gradle", Some("8.5")));
    }

    #[test]
    fn test_unknown_filter_key_rejected() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        assert!(session.apply_filter_change("scala", Some("3"), &presenter()).is_none());
        assert!(!session.has_active_filters());
    }

    #[test]
    fn test_nested_cycle_is_a_no_op() {
        let session = Rc::new(CatalogSession::new());
        session.initialize(projects(), "data.json");
        session.update_filter("java", Some("17"));

        let presenter = ReentrantPresenter {
            session: Rc::clone(&session),
            nested_results: RefCell::new(Vec::new()),
        };
        let model = session.update_all_dropdowns(&presenter);

        assert!(model.is_some());
        assert_eq!(*presenter.nested_results.borrow(), vec![true]);
        // The guard is released once the outer cycle returns
        assert!(session.update_all_dropdowns(&presenter).is_some());
    }

    #[test]
    fn test_queries_follow_filter_state() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");

        assert_eq!(session.filtered_dependencies().len(), 2);
        assert_eq!(
            session.dependency_counts(),
            DependencyCounts {
                total_count: 3,
                unique_count: 2
            }
        );

        session.update_filter("spring", Some("3.1.0"));
        assert_eq!(session.filtered_projects().len(), 1);
        assert_eq!(session.filtered_dependencies().len(), 2);
        assert!(session.is_combination_valid());

        session.update_filter("java", Some("11"));
        assert!(!session.is_combination_valid());
        assert!(session.filtered_dependencies().is_empty());
    }

    #[test]
    fn test_search_term_narrows_dependencies() {
        let session = CatalogSession::new();
        session.initialize(projects(), "data.json");
        session.set_search_term("2.0");
        assert_eq!(session.filtered_dependencies().len(), 1);
        session.clear_search();
        assert_eq!(session.filtered_dependencies().len(), 2);
    }
}
