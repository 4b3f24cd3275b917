use crate::catalog::domain::{Dependency, Dimension, Project, Requirements};
use crate::catalog::policies::VariableResolution;
use crate::shared::error::{CatalogError, ErrorKind};
use crate::shared::Result;
use serde_json::{Map, Value};

/// Name given to projects whose record has no `project` field
pub const DEFAULT_PROJECT_NAME: &str = "Unnamed project";

const DEFAULT_GROUP: &str = "unknown-group";
const DEFAULT_ARTIFACT: &str = "unknown-artifact";
const DEFAULT_VERSION: &str = "0.0.0";
const DEFAULT_CONFIGURATION: &str = "implementation";

/// Legacy "no such version" marker written by older extractors
const LEGACY_NONE_MARKER: &str = "NENHUM";

/// Result of validating a whole catalogue document
#[derive(Debug, Clone, Default)]
pub struct ValidatedCatalog {
    pub projects: Vec<Project>,
    pub skipped: usize,
}

/// ProjectValidator - Single normalization boundary for catalogue records
///
/// Turns loosely-shaped JSON records into [`Project`] values. Every nested
/// container in the output is freshly built, so validating the same document
/// twice never yields projects that share state.
#[derive(Debug, Clone, Default)]
pub struct ProjectValidator {
    variables: VariableResolution,
}

impl ProjectValidator {
    pub fn new(variables: VariableResolution) -> Self {
        Self { variables }
    }

    /// Validates one raw project record
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidProject`] when the record is null, not
    /// an object, or an empty object
    pub fn validate(&self, raw: &Value) -> Result<Project> {
        let record = match raw {
            Value::Null => {
                return Err(CatalogError::InvalidProject {
                    reason: "record is null".to_string(),
                }
                .into())
            }
            Value::Object(map) if map.is_empty() => {
                return Err(CatalogError::InvalidProject {
                    reason: "record is an empty object".to_string(),
                }
                .into())
            }
            Value::Object(map) => map,
            other => {
                return Err(CatalogError::InvalidProject {
                    reason: format!("expected an object, found {}", json_type(other)),
                }
                .into())
            }
        };

        let name = record
            .get("project")
            .and_then(scalar_text)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        let requirements = Self::build_requirements(record);
        let dependencies = self.build_dependencies(&name, record);

        Ok(Project::new(name, requirements, dependencies))
    }

    /// Validates every record, skipping (and logging) the invalid ones.
    pub fn validate_all(&self, records: &[Value]) -> ValidatedCatalog {
        let mut catalog = ValidatedCatalog::default();

        for (index, record) in records.iter().enumerate() {
            match self.validate(record) {
                Ok(project) => catalog.projects.push(project),
                Err(e) => {
                    catalog.skipped += 1;
                    tracing::warn!(
                        kind = %ErrorKind::Validation,
                        index,
                        "Skipping invalid project: {}",
                        e
                    );
                }
            }
        }

        catalog
    }

    fn build_requirements(record: &Map<String, Value>) -> Requirements {
        let nested = record.get("requirements").and_then(Value::as_object);
        let read = |dimension: Dimension| {
            let value = match nested {
                Some(requirements) => requirements.get(dimension.key()),
                None => record.get(dimension.legacy_field()),
            };
            value
                .and_then(scalar_text)
                .filter(|v| !v.is_empty() && v != LEGACY_NONE_MARKER)
        };

        Requirements::new(
            read(Dimension::Java),
            read(Dimension::Kotlin),
            read(Dimension::Gradle),
            read(Dimension::SpringBoot),
        )
    }

    fn build_dependencies(&self, project: &str, record: &Map<String, Value>) -> Vec<Dependency> {
        let items = match record.get("dependencies") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => {
                tracing::debug!(project, "Project has no dependency list");
                return Vec::new();
            }
            Some(other) => {
                tracing::warn!(
                    kind = %ErrorKind::Validation,
                    project,
                    "Project {} has dependencies in an invalid format ({}); using an empty list",
                    project,
                    json_type(other)
                );
                return Vec::new();
            }
        };

        let dependencies: Vec<Dependency> = items
            .iter()
            .filter_map(|item| self.build_dependency(project, item))
            .collect();

        let unresolved = dependencies
            .iter()
            .filter(|d| d.has_unresolved_variable())
            .count();
        if unresolved > 0 {
            tracing::warn!(
                kind = %ErrorKind::Validation,
                project,
                unresolved,
                "Project {} contains unresolved version variables",
                project
            );
        }

        dependencies
    }

    fn build_dependency(&self, project: &str, item: &Value) -> Option<Dependency> {
        let entry = match item.as_object() {
            Some(entry) if !entry.is_empty() => entry,
            _ => {
                tracing::debug!(project, "Dropping empty dependency entry");
                return None;
            }
        };

        let group = Self::identity_field(project, entry, "group", DEFAULT_GROUP)?;
        let name = Self::identity_field(project, entry, "name", DEFAULT_ARTIFACT)?;

        let raw_version = non_empty_text(entry.get("version"))
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let (version, original_version) = self.variables.resolve(&raw_version);

        let configuration = non_empty_text(entry.get("configuration"))
            .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string());
        let declaration = non_empty_text(entry.get("declaration")).unwrap_or_else(|| {
            format!(
                "{}(\"{}:{}:{}\")",
                configuration,
                group,
                name,
                version.value()
            )
        });

        let projects = entry
            .get("projects")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Dependency::new(
            group,
            name,
            version,
            configuration,
            declaration,
            projects,
            original_version,
        ))
    }

    /// Reads `group` / `name`: absent means placeholder, blank means drop.
    fn identity_field(
        project: &str,
        entry: &Map<String, Value>,
        field: &str,
        default: &str,
    ) -> Option<String> {
        match entry.get(field) {
            None | Some(Value::Null) => Some(default.to_string()),
            Some(value) => match scalar_text(value) {
                Some(text) if !text.trim().is_empty() => Some(text),
                _ => {
                    tracing::warn!(
                        kind = %ErrorKind::Validation,
                        project,
                        field,
                        "Dropping dependency with blank {}",
                        field
                    );
                    None
                }
            },
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    value.and_then(scalar_text).filter(|s| !s.trim().is_empty())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
