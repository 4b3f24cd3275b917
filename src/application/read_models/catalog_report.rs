//! Catalogue report read model
//!
//! Aggregates everything a presenter needs after a query: the filters the
//! user asked for, what the dropdown cycle made of them, and the resulting
//! projects and dependencies.

use crate::catalog::domain::{CatalogStats, Requirements};
use crate::catalog::services::{DependencyCounts, DependencyEntry, DropdownView};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub source: String,
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// A filtered project as shown in the project list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    pub requirements: Requirements,
    pub dependency_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub metadata: ReportMetadata,
    /// Labels of the filters as requested, before the dropdown cycle
    pub requested_filters: Vec<String>,
    /// Whether any project satisfied the requested filters
    pub requested_combination_valid: bool,
    /// Labels of the user's filters that survived the dropdown cycle;
    /// auto-selected singletons appear only in `dropdowns`
    pub active_filters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub dropdowns: Vec<DropdownView>,
    pub counts: DependencyCounts,
    pub projects: Vec<ProjectView>,
    pub dependencies: Vec<DependencyEntry>,
    pub stats: CatalogStats,
}

impl CatalogReport {
    /// Dimensions whose requested selection was dropped by the cycle.
    pub fn reset_filters(&self) -> Vec<String> {
        self.dropdowns
            .iter()
            .filter(|d| d.reset)
            .map(|d| d.dimension.display_name().to_string())
            .collect()
    }
}
