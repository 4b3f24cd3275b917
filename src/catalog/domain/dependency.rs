use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A version that is still a build-variable placeholder (`${x}` or `$x`)
/// with no known substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableRef {
    value: String,
    original_version: String,
    variable_name: String,
}

impl VariableRef {
    pub fn new(value: String, variable_name: String) -> Self {
        Self {
            original_version: value.clone(),
            value,
            variable_name,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn original_version(&self) -> &str {
        &self.original_version
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }
}

impl Serialize for VariableRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VariableRef", 4)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("originalVersion", &self.original_version)?;
        state.serialize_field("hasUnresolvedVariable", &true)?;
        state.serialize_field("variableName", &self.variable_name)?;
        state.end()
    }
}

/// Version of a dependency as declared in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum DependencyVersion {
    Literal(String),
    Unresolved(VariableRef),
}

impl DependencyVersion {
    /// Raw version text; for placeholders this is the placeholder itself.
    /// This is the value used for equality, deduplication and search.
    pub fn value(&self) -> &str {
        match self {
            DependencyVersion::Literal(v) => v,
            DependencyVersion::Unresolved(r) => r.value(),
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, DependencyVersion::Unresolved(_))
    }
}

impl fmt::Display for DependencyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyVersion::Literal(v) => f.write_str(v),
            DependencyVersion::Unresolved(r) => write!(f, "<Ref: {}>", r.variable_name()),
        }
    }
}

/// Identity of a dependency: `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Dependency value object as declared by one project.
///
/// Built only by the project validator; downstream code clones it and at
/// most replaces the `projects` attribution via [`Dependency::with_projects`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    group: String,
    name: String,
    version: DependencyVersion,
    configuration: String,
    declaration: String,
    projects: Vec<String>,
    has_unresolved_variable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_version: Option<String>,
}

impl Dependency {
    pub(crate) fn new(
        group: String,
        name: String,
        version: DependencyVersion,
        configuration: String,
        declaration: String,
        projects: Vec<String>,
        original_version: Option<String>,
    ) -> Self {
        let has_unresolved_variable = version.is_unresolved();
        Self {
            group,
            name,
            version,
            configuration,
            declaration,
            projects,
            has_unresolved_variable,
            original_version,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &DependencyVersion {
        &self.version
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn has_unresolved_variable(&self) -> bool {
        self.has_unresolved_variable
    }

    pub fn original_version(&self) -> Option<&str> {
        self.original_version.as_deref()
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey {
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.version.value().to_string(),
        }
    }

    /// Returns a copy carrying a different project attribution.
    pub(crate) fn with_projects(&self, projects: Vec<String>) -> Self {
        Self {
            projects,
            ..self.clone()
        }
    }
}
