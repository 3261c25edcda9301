use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::generator::GeneratorConfig;
use self::logging::LoggingConfig;
use self::lookup::LookupConfig;

pub mod catalog;
pub mod generator;
pub mod logging;
pub mod lookup;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub catalog: CatalogConfig,
    pub lookup: LookupConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Built-in defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply `WORTWIRBEL_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key/value source. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(count) = var("WORTWIRBEL_COUNT").and_then(|v| v.parse().ok()) {
            self.generator.count = count;
        }

        if let Some(output_dir) = var("WORTWIRBEL_OUTPUT_DIR") {
            self.generator.output_dir = output_dir;
        }

        if let Some(delay) = var("WORTWIRBEL_WRITE_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.generator.write_delay_ms = delay;
        }

        if let Some(path) = var("WORTWIRBEL_CATALOG") {
            self.catalog.path = Some(path);
        }

        if let Some(level) = var("WORTWIRBEL_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.count, 10);
        assert_eq!(config.generator.output_dir, "data/languages/german/words");
        assert!(config.generator.avoid_duplicates);
        assert_eq!(config.generator.write_delay_ms, 100);
        assert!(config.catalog.path.is_none());
        assert!(!config.lookup.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"generator": {"count": 3}}"#).unwrap();
        assert_eq!(config.generator.count, 3);
        assert_eq!(config.generator.output_dir, "data/languages/german/words");
        assert!(config.generator.avoid_duplicates);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WORTWIRBEL_COUNT", "4"),
            ("WORTWIRBEL_OUTPUT_DIR", "/tmp/words"),
            ("WORTWIRBEL_WRITE_DELAY_MS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.generator.count, 4);
        assert_eq!(config.generator.output_dir, "/tmp/words");
        assert_eq!(config.generator.write_delay_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"lookup": {"enabled": true}, "logging": {"level": "debug", "format": "json"}}"#)
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.lookup.enabled);
        assert_eq!(config.lookup.provider, "none");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, logging::LogFormat::Json);
    }

    #[test]
    fn test_load_from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
