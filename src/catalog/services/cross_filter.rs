use super::version_comparator::VersionComparator;
use crate::catalog::domain::{
    Dependency, DependencyKey, Dimension, FilterSelections, Project, NONE_LABEL,
};
use crate::shared::error::ErrorKind;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// One row of the filtered dependency view.
///
/// `id` is a fresh list key per call and never takes part in equality or
/// deduplication, which always go through [`Dependency::key`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEntry {
    pub id: Uuid,
    pub project_name: String,
    #[serde(flatten)]
    pub dependency: Dependency,
}

impl DependencyEntry {
    fn new(project_name: String, dependency: Dependency) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_name,
            dependency,
        }
    }

    pub fn key(&self) -> DependencyKey {
        self.dependency.key()
    }

    fn matches_search(&self, needle: &str) -> bool {
        let dependency = &self.dependency;
        contains_ignore_case(dependency.name(), needle)
            || contains_ignore_case(dependency.group(), needle)
            || contains_ignore_case(dependency.version().value(), needle)
            || dependency
                .projects()
                .iter()
                .any(|p| contains_ignore_case(p, needle))
    }
}

/// Dependency totals for the current filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCounts {
    pub total_count: usize,
    pub unique_count: usize,
}

/// CrossFilterEngine - Pure queries over a project corpus and filter selections
///
/// Every operation borrows its inputs and allocates its output; nothing here
/// mutates the store or the selections, so calls can be repeated freely.
pub struct CrossFilterEngine;

impl CrossFilterEngine {
    /// Values of `dimension` still reachable under the *other* selections
    ///
    /// Absent values map to [`NONE_LABEL`] on dimensions that support the
    /// sentinel and are dropped elsewhere. The result is deduplicated and
    /// sorted with [`VersionComparator::compare_for`]. An empty result means
    /// the dimension has no compatible option.
    pub fn compatible_options(
        projects: &[Project],
        dimension: Dimension,
        selections: &FilterSelections,
    ) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();

        for project in projects
            .iter()
            .filter(|p| p.requirements().matches_all_except(selections, dimension))
        {
            let value = match project.requirements().get(dimension) {
                Some(value) => value,
                None if dimension.supports_none_sentinel() => NONE_LABEL,
                None => continue,
            };
            if !options.iter().any(|o| o == value) {
                options.push(value.to_string());
            }
        }

        VersionComparator::sort_for(dimension, &mut options);
        tracing::debug!(%dimension, ?options, "Computed compatible options");
        options
    }

    /// True when no filter is active or at least one project satisfies all
    /// active selections.
    pub fn validate_filter_combination(
        projects: &[Project],
        selections: &FilterSelections,
    ) -> bool {
        if !selections.has_active() {
            return true;
        }

        let valid = projects
            .iter()
            .any(|p| p.requirements().matches_all(selections));
        if !valid {
            tracing::warn!(
                kind = %ErrorKind::Filter,
                filters = ?selections.labels(),
                "No project matches the selected filter combination"
            );
        }
        valid
    }

    /// Projects matching every selection whose name contains `search_term`
    /// (case-insensitive).
    pub fn filtered_projects<'a>(
        projects: &'a [Project],
        selections: &FilterSelections,
        search_term: &str,
    ) -> Vec<&'a Project> {
        let needle = search_term.trim().to_lowercase();
        projects
            .iter()
            .filter(|p| p.requirements().matches_all(selections))
            .filter(|p| needle.is_empty() || contains_ignore_case(p.name(), &needle))
            .collect()
    }

    /// Dependencies of the matching projects
    ///
    /// With no active selection, entries sharing `group:name:version` are
    /// merged and their `projects` attribution is the ordered union of the
    /// contributors. With any active selection every (project, dependency)
    /// pair is returned on its own.
    pub fn filtered_dependencies(
        projects: &[Project],
        selections: &FilterSelections,
        search_term: &str,
    ) -> Vec<DependencyEntry> {
        let pairs = Self::dependency_pairs(projects, selections);
        let entries = if selections.has_active() {
            pairs
        } else {
            Self::merge_by_key(pairs)
        };
        Self::apply_search(entries, search_term)
    }

    /// Per-pair total and distinct-key count, per-pair even without filters.
    pub fn dependency_counts(
        projects: &[Project],
        selections: &FilterSelections,
        search_term: &str,
    ) -> DependencyCounts {
        let entries = Self::apply_search(
            Self::dependency_pairs(projects, selections),
            search_term,
        );
        let unique: HashSet<DependencyKey> = entries.iter().map(DependencyEntry::key).collect();

        DependencyCounts {
            total_count: entries.len(),
            unique_count: unique.len(),
        }
    }

    fn dependency_pairs(projects: &[Project], selections: &FilterSelections) -> Vec<DependencyEntry> {
        projects
            .iter()
            .filter(|p| p.requirements().matches_all(selections))
            .flat_map(|project| {
                project
                    .dependencies()
                    .iter()
                    .filter(|d| !d.group().is_empty() && !d.name().is_empty())
                    .map(move |dependency| {
                        let mut attribution = dependency.projects().to_vec();
                        if !attribution.iter().any(|n| n == project.name()) {
                            attribution.push(project.name().to_string());
                        }
                        DependencyEntry::new(
                            project.name().to_string(),
                            dependency.with_projects(attribution),
                        )
                    })
            })
            .collect()
    }

    fn merge_by_key(pairs: Vec<DependencyEntry>) -> Vec<DependencyEntry> {
        let mut merged: Vec<DependencyEntry> = Vec::new();
        let mut positions: HashMap<DependencyKey, usize> = HashMap::new();

        for entry in pairs {
            let key = entry.key();
            match positions.get(&key) {
                Some(&index) => {
                    let existing = &mut merged[index];
                    let mut union = existing.dependency.projects().to_vec();
                    for name in entry.dependency.projects() {
                        if !union.contains(name) {
                            union.push(name.clone());
                        }
                    }
                    existing.dependency = existing.dependency.with_projects(union);
                }
                None => {
                    positions.insert(key, merged.len());
                    merged.push(entry);
                }
            }
        }

        merged
    }

    fn apply_search(entries: Vec<DependencyEntry>, search_term: &str) -> Vec<DependencyEntry> {
        let needle = search_term.trim().to_lowercase();
        if needle.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|e| e.matches_search(&needle))
            .collect()
    }
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{DependencyVersion, Requirements};

    fn dep(group: &str, name: &str, version: &str) -> Dependency {
        Dependency::new(
            group.to_string(),
            name.to_string(),
            DependencyVersion::Literal(version.to_string()),
            "implementation".to_string(),
            format!("implementation(\"{}:{}:{}\")", group, name, version),
            vec![],
            None,
        )
    }

    fn project(
        name: &str,
        reqs: [Option<&str>; 4],
        dependencies: Vec<Dependency>,
    ) -> Project {
        let [java, kotlin, gradle, spring] = reqs.map(|v| v.map(str::to_string));
        Project::new(
            name.to_string(),
            Requirements::new(java, kotlin, gradle, spring),
            dependencies,
        )
    }

    fn shared_platform_store() -> Vec<Project> {
        vec![
            project(
                "P1",
                [Some("17"), None, Some("8.5"), Some("3.1.0")],
                vec![dep("g", "a", "1.0")],
            ),
            project(
                "P2",
                [Some("17"), Some("1.9.10"), Some("8.5"), None],
                vec![dep("g", "a", "1.0")],
            ),
        ]
    }

    fn wider_store() -> Vec<Project> {
        vec![
            project(
                "billing",
                [Some("11"), None, Some("7.6"), Some("2.6.15")],
                vec![dep("org.slf4j", "slf4j-api", "1.7.36"), dep("g", "a", "1.0")],
            ),
            project(
                "orders",
                [Some("17"), Some("1.9.10"), Some("8.5"), Some("3.1.0")],
                vec![dep("g", "a", "1.0"), dep("g", "b", "2.0")],
            ),
            project(
                "gateway",
                [Some("17"), Some("1.8.20"), Some("8.5"), None],
                vec![dep("g", "b", "2.0")],
            ),
            project("legacy", [Some("1.8"), None, None, None], vec![]),
        ]
    }

    #[test]
    fn test_unfiltered_dependencies_merge_across_projects() {
        let store = shared_platform_store();
        let selections = FilterSelections::default();

        let deps = CrossFilterEngine::filtered_dependencies(&store, &selections, "");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].dependency.projects(), ["P1", "P2"]);
        assert_eq!(deps[0].project_name, "P1");

        let counts = CrossFilterEngine::dependency_counts(&store, &selections, "");
        assert_eq!(
            counts,
            DependencyCounts {
                total_count: 2,
                unique_count: 1
            }
        );
    }

    #[test]
    fn test_kotlin_options_include_absent_sentinel_last() {
        let store = shared_platform_store();
        let selections = FilterSelections::default().with(Dimension::Java, "17");
        let options = CrossFilterEngine::compatible_options(&store, Dimension::Kotlin, &selections);
        assert_eq!(options, vec!["1.9.10", "None"]);
    }

    #[test]
    fn test_sentinel_selection_matches_absent_requirement() {
        let store = shared_platform_store();
        let selections = FilterSelections::default().with(Dimension::Kotlin, NONE_LABEL);
        let projects = CrossFilterEngine::filtered_projects(&store, &selections, "");
        let names: Vec<&str> = projects.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["P1"]);
    }

    #[test]
    fn test_unknown_java_version_empties_every_other_dimension() {
        let store = shared_platform_store();
        let selections = FilterSelections::default().with(Dimension::Java, "11");
        for dimension in Dimension::ALL.into_iter().filter(|d| *d != Dimension::Java) {
            assert!(CrossFilterEngine::compatible_options(&store, dimension, &selections).is_empty());
        }
        assert!(!CrossFilterEngine::validate_filter_combination(&store, &selections));
    }

    #[test]
    fn test_own_dimension_ignores_own_selection() {
        let store = shared_platform_store();
        let selections = FilterSelections::default().with(Dimension::Java, "11");
        assert_eq!(
            CrossFilterEngine::compatible_options(&store, Dimension::Java, &selections),
            vec!["17"]
        );
    }

    #[test]
    fn test_sentinel_never_offered_for_java_or_gradle() {
        let store = wider_store();
        let none = FilterSelections::default();
        let gradle = CrossFilterEngine::compatible_options(&store, Dimension::Gradle, &none);
        assert_eq!(gradle, vec!["7.6", "8.5"]);
        assert!(!gradle.iter().any(|v| v == NONE_LABEL));
    }

    #[test]
    fn test_java_options_use_legacy_normalization() {
        let store = wider_store();
        let options =
            CrossFilterEngine::compatible_options(&store, Dimension::Java, &FilterSelections::default());
        assert_eq!(options, vec!["1.8", "11", "17"]);
    }

    #[test]
    fn test_no_filters_combination_is_valid() {
        assert!(CrossFilterEngine::validate_filter_combination(
            &[],
            &FilterSelections::default()
        ));
    }

    #[test]
    fn test_filtered_dependencies_per_pair_when_filtered() {
        let store = shared_platform_store();
        let selections = FilterSelections::default().with(Dimension::Gradle, "8.5");
        let deps = CrossFilterEngine::filtered_dependencies(&store, &selections, "");
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].dependency.projects(), ["P1"]);
        assert_eq!(deps[1].dependency.projects(), ["P2"]);
    }

    #[test]
    fn test_ids_are_unique_and_ignored_for_dedup() {
        let store = wider_store();
        let selections = FilterSelections::default().with(Dimension::Java, "17");
        let deps = CrossFilterEngine::filtered_dependencies(&store, &selections, "");
        let ids: HashSet<Uuid> = deps.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), deps.len());
        assert_eq!(deps[1].key(), deps[2].key());
    }

    #[test]
    fn test_search_matches_fields_and_projects() {
        let store = wider_store();
        let none = FilterSelections::default();

        let by_name = CrossFilterEngine::filtered_dependencies(&store, &none, "SLF4J");
        assert_eq!(by_name.len(), 1);

        let by_version = CrossFilterEngine::filtered_dependencies(&store, &none, "2.0");
        assert_eq!(by_version.len(), 1);
        assert_eq!(by_version[0].dependency.name(), "b");

        let by_project = CrossFilterEngine::filtered_dependencies(&store, &none, "gateway");
        assert_eq!(by_project.len(), 1);
        assert_eq!(by_project[0].dependency.projects(), ["orders", "gateway"]);
    }

    #[test]
    fn test_filtered_projects_search_by_name() {
        let store = wider_store();
        let projects =
            CrossFilterEngine::filtered_projects(&store, &FilterSelections::default(), "  ORD ");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name(), "orders");
    }

    #[test]
    fn test_dedup_invariant_without_filters() {
        for store in [shared_platform_store(), wider_store(), Vec::new()] {
            let counts =
                CrossFilterEngine::dependency_counts(&store, &FilterSelections::default(), "");
            let expected: usize = store.iter().map(|p| p.dependencies().len()).sum();
            assert_eq!(counts.total_count, expected);
            assert!(counts.unique_count <= counts.total_count);
        }
    }

    #[test]
    fn test_unique_equals_total_without_shared_keys() {
        let store = vec![project(
            "solo",
            [Some("21"), None, None, None],
            vec![dep("g", "a", "1.0"), dep("g", "a", "1.1")],
        )];
        let counts = CrossFilterEngine::dependency_counts(&store, &FilterSelections::default(), "");
        assert_eq!(counts.total_count, 2);
        assert_eq!(counts.unique_count, 2);
    }

    #[test]
    fn test_filter_monotonicity() {
        let store = wider_store();
        let base = FilterSelections::default();
        let base_projects = CrossFilterEngine::filtered_projects(&store, &base, "").len();

        for added in Dimension::ALL {
            for value in CrossFilterEngine::compatible_options(&store, added, &base) {
                let narrowed = base.clone().with(added, &value);
                assert!(
                    CrossFilterEngine::filtered_projects(&store, &narrowed, "").len()
                        <= base_projects
                );
                for other in Dimension::ALL.into_iter().filter(|d| *d != added) {
                    let before = CrossFilterEngine::compatible_options(&store, other, &base).len();
                    let after =
                        CrossFilterEngine::compatible_options(&store, other, &narrowed).len();
                    assert!(after <= before, "{} narrowed by {}={}", other, added, value);
                }
            }
        }
    }
}
