//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `display`: default place and language
//!
//! The weather section reuses [`WeatherConfig`] from the integration crate
//! and the templates section reuses [`TemplateConfig`].
//!
//! Sources, later ones winning: built-in defaults, an optional `config.toml`
//! in the working directory, then `TENKI_*` environment variables with `__`
//! between nested keys (e.g. `TENKI_SERVER__PORT=8080`).

mod display;
mod server;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::templates::TemplateConfig;

pub use display::DisplayConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TENKI";

/// Longest outbound timeout accepted
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but make no sense together
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo endpoints and timeout
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Page defaults
    #[serde(default)]
    pub display: DisplayConfig,

    /// Template engine settings
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(config::File::with_name("config").required(false), None)
    }

    /// Load from TOML text instead of `config.toml`; environment still applies
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::from_sources(config::File::from_str(toml, config::FileFormat::Toml), None)
    }

    /// Load from TOML text, taking `TENKI_*` variables from `vars` instead
    /// of the process environment
    pub fn from_toml_str_with_env<I, K, V>(toml: &str, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_sources(
            config::File::from_str(toml, config::FileFormat::Toml),
            Some(vars),
        )
    }

    fn from_sources<S>(
        file: S,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("display.default_city", "Zurich")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., TENKI_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("weather.base_url", &self.weather.base_url)?;
        validate_url(
            "weather.geocoding_base_url",
            &self.weather.geocoding_base_url,
        )?;

        if self.weather.timeout_secs == 0 || self.weather.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Invalid(format!(
                "weather.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.weather.timeout_secs
            )));
        }

        if self.display.default_city.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.default_city must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn validate_url(key: &str, url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{key} must not be empty")));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "{key} must be an http(s) URL, got {url:?}"
        )));
    }
    Ok(())
}
