//! Front-end configuration.
//!
//! Loaded via the `config` crate from, lowest priority first: the bundled
//! `ballotbox.toml`, `BALLOTBOX__*` environment variables where the host
//! provides them, and a `BALLOTBOX_API_BASE_URL` value fixed at build time.

use ballotbox_api::ApiConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const BUNDLED: &str = include_str!("../ballotbox.toml");

/// Complete front-end configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// Remote service location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,ballotbox_web=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl WebConfig {
    /// Loads the configuration the application starts with.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(BUNDLED, option_env!("BALLOTBOX_API_BASE_URL"))
    }

    fn from_sources(bundled: &str, build_base_url: Option<&str>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(bundled, FileFormat::Toml))
            .add_source(
                Environment::with_prefix("BALLOTBOX")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("api.base_url", build_base_url)?
            .build()?
            .try_deserialize()
    }
}
