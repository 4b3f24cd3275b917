use crate::application::read_models::{CatalogReport, ProjectView};
use crate::catalog::domain::Dimension;
use crate::catalog::services::{DependencyEntry, DropdownView};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

const PROJECT_TABLE_HEADER: &str = "| Project | Java | Kotlin | Gradle | Spring Boot | Dependencies |\n";
const PROJECT_TABLE_SEPARATOR: &str = "|---------|------|--------|--------|-------------|--------------|\n";

const DEPENDENCY_TABLE_HEADER: &str = "| Group | Artifact | Version | Configuration | Projects |\n";
const DEPENDENCY_TABLE_SEPARATOR: &str = "|-------|----------|---------|---------------|----------|\n";

/// Placeholder for an absent requirement
const NOT_SET: &str = "-";

/// MarkdownFormatter adapter for a human-readable catalogue report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &CatalogReport) {
        output.push_str("# Dependency Catalogue\n\n");
        output.push_str(&format!("Source: `{}`\n\n", report.metadata.source));
    }

    fn render_filters(&self, output: &mut String, report: &CatalogReport) {
        output.push_str("## Filters\n\n");
        if report.active_filters.is_empty() {
            output.push_str("No filters active.\n\n");
        } else {
            for label in &report.active_filters {
                output.push_str(&format!("- {}\n", label));
            }
            output.push('\n');
        }

        if !report.requested_combination_valid {
            output.push_str(&format!(
                "> ⚠️ No project matches the requested combination ({}).\n\n",
                report.requested_filters.join(", ")
            ));
        }
        if let Some(term) = &report.search_term {
            output.push_str(&format!("Search: `{}`\n\n", term));
        }

        for view in &report.dropdowns {
            output.push_str(&Self::dropdown_line(view));
        }
        output.push('\n');
    }

    fn dropdown_line(view: &DropdownView) -> String {
        let options = if view.options.is_empty() {
            "_no compatible option_".to_string()
        } else {
            view.options
                .iter()
                .map(|o| {
                    if view.selected.as_deref() == Some(o.as_str()) {
                        format!("**{}**", o)
                    } else {
                        o.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut flags = String::new();
        if view.locked {
            flags.push_str(" 🔒");
        }
        if view.reset {
            flags.push_str(" (reset)");
        }
        format!("- {}: {}{}\n", view.dimension.display_name(), options, flags)
    }

    fn render_summary(&self, output: &mut String, report: &CatalogReport) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Projects shown: {} of {}\n",
            report.projects.len(),
            report.stats.total_projects
        ));
        output.push_str(&format!(
            "- Dependencies: {} total, {} unique\n\n",
            report.counts.total_count, report.counts.unique_count
        ));
    }

    fn render_projects(&self, output: &mut String, projects: &[ProjectView]) {
        output.push_str("## Projects\n\n");
        if projects.is_empty() {
            output.push_str("No matching projects.\n\n");
            return;
        }
        output.push_str(PROJECT_TABLE_HEADER);
        output.push_str(PROJECT_TABLE_SEPARATOR);
        for project in projects {
            let requirement = |d: Dimension| {
                Self::escape_cell(project.requirements.get(d).unwrap_or(NOT_SET))
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&project.name),
                requirement(Dimension::Java),
                requirement(Dimension::Kotlin),
                requirement(Dimension::Gradle),
                requirement(Dimension::SpringBoot),
                project.dependency_count
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[DependencyEntry]) {
        output.push_str("## Dependencies\n\n");
        if dependencies.is_empty() {
            output.push_str("No matching dependencies.\n");
            return;
        }
        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for entry in dependencies {
            let dependency = &entry.dependency;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_cell(dependency.group()),
                Self::escape_cell(dependency.name()),
                Self::escape_cell(&dependency.version().to_string()),
                Self::escape_cell(dependency.configuration()),
                Self::escape_cell(&dependency.projects().join(", "))
            ));
        }
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, report: &CatalogReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_filters(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_projects(&mut output, &report.projects);
        self.render_dependencies(&mut output, &report.dependencies);
        Ok(output)
    }
}
