use std::path::Path;

use anyhow::Result;
use common::DEFAULT_API_BASE_URL;
use ::config::{Config, Environment, File, Map};
use serde::Deserialize;
use tracing::debug;

/// Log filter used when neither RUST_LOG nor configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "forecaster=info,client=info";

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "forecaster";

/// Prefix of environment variables overriding configuration keys,
/// e.g. `FORECASTER_API_BASE_URL`.
pub const ENV_PREFIX: &str = "FORECASTER";

/// Application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the configuration
/// file, `FORECASTER_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Origin of the Prediction Service, e.g. `http://localhost:8000`
    pub api_base_url: String,
    /// Tracing filter directives
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration, reading `config_path` when given and
    /// `forecaster.{toml,yaml,json}` otherwise (if present).
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_from(config_path, Path::new(CONFIG_FILE_NAME), None)
    }

    /// `default_file` is probed without an extension when no path is given.
    /// `env` stands in for the process environment when set.
    fn load_from(
        config_path: Option<&Path>,
        default_file: &Path,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        let builder = match config_path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::from(default_file).required(false)),
        };

        let config: AppConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Replace the service origin when an override is given.
    pub fn with_api_base_url(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create config file");
        file.write_all(contents.as_bytes()).expect("Failed to write config file");
        file
    }

    #[test]
    fn test_defaults_apply_for_empty_file() {
        let file = config_file("");

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = config_file(
            "api_base_url = \"http://forecast.internal:9000\"\nlog_filter = \"debug\"\n",
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.api_base_url, "http://forecast.internal:9000");
        assert_eq!(config.log_filter, "debug");
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_apply_without_config_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config =
            AppConfig::load_from(None, &dir.path().join(CONFIG_FILE_NAME), env(&[])).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_default_file_is_found_by_name() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(
            dir.path().join("forecaster.toml"),
            "api_base_url = \"http://from-default-file:3\"\n",
        )
        .expect("Failed to write config file");

        let config =
            AppConfig::load_from(None, &dir.path().join(CONFIG_FILE_NAME), env(&[])).unwrap();

        assert_eq!(config.api_base_url, "http://from-default-file:3");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config_file("api_base_url = \"http://from-file:1\"\nlog_filter = \"warn\"\n");

        let config = AppConfig::load_from(
            Some(file.path()),
            Path::new(CONFIG_FILE_NAME),
            env(&[
                ("FORECASTER_API_BASE_URL", "http://from-env:4"),
                ("UNRELATED_API_BASE_URL", "http://ignored:5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://from-env:4");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/forecaster.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_override_wins() {
        let file = config_file("api_base_url = \"http://from-file:1\"\n");

        let config = AppConfig::load(Some(file.path()))
            .unwrap()
            .with_api_base_url(Some("http://from-cli:2".to_string()));

        assert_eq!(config.api_base_url, "http://from-cli:2");
    }
}
