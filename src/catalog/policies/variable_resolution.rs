use crate::catalog::domain::{DependencyVersion, VariableRef};
use std::collections::BTreeMap;

/// VariableResolution policy for build-variable version placeholders
///
/// Dependency versions extracted from build scripts are sometimes still
/// placeholders such as `${kotlinVersion}` or `$kotlinVersion`. Known
/// variables are substituted; unknown ones are kept as a [`VariableRef`].
#[derive(Debug, Clone, Default)]
pub struct VariableResolution {
    known_variables: BTreeMap<String, String>,
}

impl VariableResolution {
    pub fn new(known_variables: BTreeMap<String, String>) -> Self {
        Self { known_variables }
    }

    pub fn known_variables(&self) -> &BTreeMap<String, String> {
        &self.known_variables
    }

    /// Resolves a raw version string
    ///
    /// # Returns
    /// The resolved version plus the original text when a placeholder was
    /// found (`None` for plain literals)
    pub fn resolve(&self, raw: &str) -> (DependencyVersion, Option<String>) {
        let Some((placeholder, variable_name)) = Self::extract_placeholder(raw) else {
            return (DependencyVersion::Literal(raw.to_string()), None);
        };

        let version = match self.known_variables.get(variable_name) {
            Some(value) => DependencyVersion::Literal(raw.replacen(placeholder, value, 1)),
            None => DependencyVersion::Unresolved(VariableRef::new(
                raw.to_string(),
                variable_name.to_string(),
            )),
        };
        (version, Some(raw.to_string()))
    }

    /// Finds the placeholder text and the variable name inside `value`
    ///
    /// Recognized forms, in order: the whole value `${name}`, an embedded
    /// `${name}`, and a leading `$name`.
    fn extract_placeholder(value: &str) -> Option<(&str, &str)> {
        if !value.contains('$') {
            return None;
        }

        if let Some(start) = value.find("${") {
            let rest = &value[start + 2..];
            if let Some(end) = rest.find('}') {
                let name = &rest[..end];
                if !name.is_empty() {
                    return Some((&value[start..start + 2 + end + 1], name));
                }
            }
            return None;
        }

        let name = value.strip_prefix('$')?;
        if name.is_empty() {
            return None;
        }
        Some((value, name))
    }
}
