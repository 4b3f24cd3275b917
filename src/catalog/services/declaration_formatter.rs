use crate::catalog::domain::Dependency;
use crate::shared::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Build tool syntax for a dependency declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Gradle,
    Maven,
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTool::Gradle => write!(f, "gradle"),
            BuildTool::Maven => write!(f, "maven"),
        }
    }
}

impl FromStr for BuildTool {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gradle" => Ok(BuildTool::Gradle),
            "maven" => Ok(BuildTool::Maven),
            _ => Err(CatalogError::Validation {
                message: format!("Unknown build tool: {}", s),
            }),
        }
    }
}

/// Renders dependencies as copy-ready build declarations.
pub struct DeclarationFormatter;

impl DeclarationFormatter {
    pub fn format(dependency: &Dependency, tool: BuildTool) -> String {
        let version = dependency.version().value();
        match tool {
            BuildTool::Gradle => format!(
                "implementation \"{}:{}:{}\"",
                dependency.group(),
                dependency.name(),
                version
            ),
            BuildTool::Maven => format!(
                "<dependency>\n    <groupId>{}</groupId>\n    <artifactId>{}</artifactId>\n    <version>{}</version>\n</dependency>",
                dependency.group(),
                dependency.name(),
                version
            ),
        }
    }

    /// Formats every dependency, one declaration after another.
    pub fn format_all<'a, I>(dependencies: I, tool: BuildTool) -> String
    where
        I: IntoIterator<Item = &'a Dependency>,
    {
        dependencies
            .into_iter()
            .map(|d| Self::format(d, tool))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
