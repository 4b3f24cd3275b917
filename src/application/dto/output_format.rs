/// Output format enumeration for catalogue reports
///
/// This enum belongs in the application layer as both the CLI (inbound
/// adapter) and the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full report as JSON (default)
    Json,
    /// Human-readable Markdown report
    Markdown,
    /// Gradle declarations of the filtered dependencies
    Gradle,
    /// Maven `<dependency>` blocks of the filtered dependencies
    Maven,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "gradle" => Ok(OutputFormat::Gradle),
            "maven" | "pom" => Ok(OutputFormat::Maven),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'markdown', 'gradle' or 'maven'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Gradle => write!(f, "gradle"),
            OutputFormat::Maven => write!(f, "maven"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("gradle").unwrap(), OutputFormat::Gradle);
        assert_eq!(OutputFormat::from_str("POM").unwrap(), OutputFormat::Maven);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Gradle,
            OutputFormat::Maven,
        ] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
