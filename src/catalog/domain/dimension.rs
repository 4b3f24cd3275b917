use crate::shared::error::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Display label for "this dimension is explicitly absent".
///
/// Only dimensions where absence is itself filterable (see
/// [`Dimension::supports_none_sentinel`]) ever produce or match it.
pub const NONE_LABEL: &str = "None";

/// One of the four tracked technology axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Java,
    Kotlin,
    Gradle,
    SpringBoot,
}

impl Dimension {
    /// All dimensions in dropdown order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Java,
        Dimension::Kotlin,
        Dimension::Gradle,
        Dimension::SpringBoot,
    ];

    /// Storage key used in catalogue documents and filter state.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Java => "java",
            Dimension::Kotlin => "kotlin",
            Dimension::Gradle => "gradle",
            Dimension::SpringBoot => "spring_boot",
        }
    }

    /// Legacy flat field name (`javaVersion`, ...) used by older documents.
    pub fn legacy_field(self) -> &'static str {
        match self {
            Dimension::Java => "javaVersion",
            Dimension::Kotlin => "kotlinVersion",
            Dimension::Gradle => "gradleVersion",
            Dimension::SpringBoot => "springBootVersion",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Java => "Java",
            Dimension::Kotlin => "Kotlin",
            Dimension::Gradle => "Gradle",
            Dimension::SpringBoot => "Spring Boot",
        }
    }

    /// Whether a missing value is offered (and matched) as [`NONE_LABEL`].
    pub fn supports_none_sentinel(self) -> bool {
        matches!(self, Dimension::Kotlin | Dimension::SpringBoot)
    }

    pub fn index(self) -> usize {
        match self {
            Dimension::Java => 0,
            Dimension::Kotlin => 1,
            Dimension::Gradle => 2,
            Dimension::SpringBoot => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = CatalogError;

    /// Accepts storage keys plus the `spring` display alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(Dimension::Java),
            "kotlin" => Ok(Dimension::Kotlin),
            "gradle" => Ok(Dimension::Gradle),
            "spring_boot" | "spring" => Ok(Dimension::SpringBoot),
            _ => Err(CatalogError::InvalidFilterKey { key: s.to_string() }),
        }
    }
}
