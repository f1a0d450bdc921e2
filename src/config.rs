//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.predictform/config.toml` (user)
//! 3. `/etc/predictform/config.toml` (system)
//!
//! With no file present, built-in defaults are used.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::client::{DEFAULT_ENDPOINT, PredictionClient};
use crate::handler::{FormSubmitHandler, RenderPolicy};
use crate::render::RenderStyle;
use crate::traits::{FormSource, ResultDisplay};
use crate::{PredictError, Result};

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Prediction endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint URL (default: http://127.0.0.1:8000/predict).
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds (default: none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Result display settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// "html" or "plain" (default: "html").
    #[serde(default)]
    pub style: RenderStyle,
    /// "latest" or "last_write_wins" (default: "latest").
    #[serde(default)]
    pub policy: RenderPolicy,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first file found in the
    /// user and system locations is used, falling back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        Self::load_or(explicit_path, Self::default)
    }

    /// Like [`Config::load`], but with caller-chosen defaults when no file
    /// is found. A file that is found is used as written.
    pub fn load_or(explicit_path: Option<&Path>, fallback: impl FnOnce() -> Self) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(fallback())
            }
        }
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PredictError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            PredictError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(PredictError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".predictform").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/predictform/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.endpoint.timeout_secs.map(Duration::from_secs)
    }

    /// Build a client for the configured endpoint.
    pub fn client(&self) -> Result<PredictionClient> {
        PredictionClient::with_timeout(&self.endpoint.url, self.timeout())
    }

    /// Build a submit handler with the configured client, style and policy.
    pub fn handler(
        &self,
        form: impl FormSource + 'static,
        display: impl ResultDisplay + 'static,
    ) -> Result<FormSubmitHandler<PredictionClient>> {
        Ok(FormSubmitHandler::new(form, display, self.client()?)
            .style(self.render.style)
            .policy(self.render.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:8000/predict");
        assert_eq!(config.endpoint.timeout_secs, None);
        assert_eq!(config.render.style, RenderStyle::Html);
        assert_eq!(config.render.policy, RenderPolicy::Latest);
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [endpoint]
            url = "http://predict.internal:9000/predict"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint.url, "http://predict.internal:9000/predict");
        // Defaults preserved
        assert_eq!(config.timeout(), None);
        assert_eq!(config.render.policy, RenderPolicy::Latest);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [endpoint]
            url = "http://127.0.0.1:8000/predict"
            timeout_secs = 15

            [render]
            style = "plain"
            policy = "last_write_wins"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.render.style, RenderStyle::Plain);
        assert_eq!(config.render.policy, RenderPolicy::LastWriteWins);
    }

    #[test]
    fn unknown_style_is_rejected() {
        let toml = r#"
            [render]
            style = "markdown"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn invalid_url_fails_client_build() {
        let config: Config = toml::from_str(
            r#"
            [endpoint]
            url = "::nope::"
        "#,
        )
        .unwrap();
        assert!(matches!(
            config.client(),
            Err(PredictError::Configuration(_))
        ));
    }
}
