//! Configuration file support for dep-catalog.
//!
//! Provides YAML-based configuration through `dep-catalog.config.yml` files,
//! and merges it with built-in defaults and command-line overrides into
//! [`CatalogSettings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::ErrorKind;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-catalog.config.yml";

const DEFAULT_SOURCE: &str = "data/dependencies.json";
const DEFAULT_HISTORY_DIR: &str = "data";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Build variables whose values are known without reading any build script.
const DEFAULT_KNOWN_VARIABLES: [(&str, &str); 5] = [
    ("kotlinVersion", "1.9.10"),
    ("springBootVersion", "2.6.15"),
    ("oracleDriverVersion", "19.8.0.0"),
    ("jjwtVersion", "0.11.5"),
    ("swaggerVersion", "2.10.0"),
];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub source: Option<String>,
    pub history_dir: Option<PathBuf>,
    pub history_enabled: Option<bool>,
    pub format: Option<String>,
    /// Merged over the built-in variables; an entry here wins.
    pub known_variables: Option<BTreeMap<String, String>>,
    pub cache_ttl_secs: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.retry_attempts == Some(0) {
        bail!(
            "Invalid config: retry_attempts must be at least 1.\n\n\
             💡 Hint: Use retry_attempts: 1 to disable retries."
        );
    }
    if let Some(ref variables) = config.known_variables {
        if variables.keys().any(|name| name.trim().is_empty()) {
            bail!(
                "Invalid config: known_variables names must not be empty.\n\n\
                 💡 Hint: Each entry maps a build variable name to its value (e.g., kotlinVersion: \"1.9.10\")."
            );
        }
    }
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(
            kind = %ErrorKind::Validation,
            field = %key,
            "Unknown config field will be ignored"
        );
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub source: String,
    pub history_dir: PathBuf,
    pub history_enabled: bool,
    pub format: OutputFormat,
    pub known_variables: BTreeMap<String, String>,
    pub cache_ttl: chrono::Duration,
    pub retry_attempts: u32,
    pub retry_delay: std::time::Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            history_dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            history_enabled: true,
            format: OutputFormat::Json,
            known_variables: DEFAULT_KNOWN_VARIABLES
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            cache_ttl: chrono::Duration::seconds(DEFAULT_CACHE_TTL_SECS as i64),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: std::time::Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Values given on the command line; each one beats the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub source: Option<String>,
    pub format: Option<OutputFormat>,
}

impl CatalogSettings {
    /// Merges defaults, then the config file, then command-line overrides.
    pub fn resolve(config: Option<ConfigFile>, overrides: SettingsOverrides) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(config) = config {
            if let Some(source) = config.source {
                settings.source = source;
            }
            if let Some(dir) = config.history_dir {
                settings.history_dir = dir;
            }
            if let Some(enabled) = config.history_enabled {
                settings.history_enabled = enabled;
            }
            if let Some(format) = config.format {
                settings.format = format.parse().map_err(anyhow::Error::msg)?;
            }
            if let Some(variables) = config.known_variables {
                settings.known_variables.extend(variables);
            }
            if let Some(secs) = config.cache_ttl_secs {
                settings.cache_ttl = i64::try_from(secs)
                    .ok()
                    .and_then(chrono::Duration::try_seconds)
                    .with_context(|| format!("Invalid config: cache_ttl_secs {} is out of range", secs))?;
            }
            if let Some(attempts) = config.retry_attempts {
                settings.retry_attempts = attempts;
            }
            if let Some(ms) = config.retry_delay_ms {
                settings.retry_delay = std::time::Duration::from_millis(ms);
            }
        }

        if let Some(source) = overrides.source {
            settings.source = source;
        }
        if let Some(format) = overrides.format {
            settings.format = format;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
source: https://example.com/dependencies.json
history_dir: snapshots
history_enabled: false
format: markdown
known_variables:
  jacksonVersion: "2.15.2"
cache_ttl_secs: 60
retry_attempts: 5
retry_delay_ms: 250
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some("https://example.com/dependencies.json"));
        assert_eq!(config.history_dir, Some(PathBuf::from("snapshots")));
        assert_eq!(config.history_enabled, Some(false));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(
            config.known_variables.unwrap().get("jacksonVersion").map(String::as_str),
            Some("2.15.2")
        );
        assert_eq!(config.cache_ttl_secs, Some(60));
        assert_eq!(config.retry_attempts, Some(5));
        assert_eq!(config.retry_delay_ms, Some(250));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: gradle\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().format.as_deref(), Some("gradle"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_retry_attempts_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "retry_attempts: 0\n");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("retry_attempts must be at least 1"));
    }

    #[test]
    fn test_empty_variable_name_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "known_variables:\n  \"  \": \"1.0\"\n");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: xml\n");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: json\nunknown_field: true\nanother_unknown: value\n");
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
    }

    #[test]
    fn test_default_settings() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.source, "data/dependencies.json");
        assert_eq!(settings.history_dir, PathBuf::from("data"));
        assert!(settings.history_enabled);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.cache_ttl, chrono::Duration::seconds(300));
        assert_eq!(settings.retry_attempts, 3);
        assert_eq!(settings.retry_delay, std::time::Duration::from_millis(1000));
        assert_eq!(settings.known_variables.len(), 5);
        assert_eq!(
            settings.known_variables.get("jjwtVersion").map(String::as_str),
            Some("0.11.5")
        );
    }

    #[test]
    fn test_resolve_precedence() {
        let config = ConfigFile {
            source: Some("from-config.json".to_string()),
            format: Some("markdown".to_string()),
            known_variables: Some(BTreeMap::from([
                ("kotlinVersion".to_string(), "2.0.0".to_string()),
                ("guavaVersion".to_string(), "33.0".to_string()),
            ])),
            cache_ttl_secs: Some(10),
            ..ConfigFile::default()
        };
        let overrides = SettingsOverrides {
            source: Some("from-cli.json".to_string()),
            format: None,
        };

        let settings = CatalogSettings::resolve(Some(config), overrides).unwrap();
        assert_eq!(settings.source, "from-cli.json");
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.cache_ttl, chrono::Duration::seconds(10));
        assert_eq!(settings.known_variables.len(), 6);
        assert_eq!(
            settings.known_variables.get("kotlinVersion").map(String::as_str),
            Some("2.0.0")
        );
    }

    #[test]
    fn test_resolve_without_config_uses_defaults() {
        let settings = CatalogSettings::resolve(
            None,
            SettingsOverrides {
                source: None,
                format: Some(OutputFormat::Maven),
            },
        )
        .unwrap();
        assert_eq!(settings.source, "data/dependencies.json");
        assert_eq!(settings.format, OutputFormat::Maven);
    }
}
