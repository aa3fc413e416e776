//! Layered configuration loading with figment.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Prefix of environment variables read by [`ConfigLoader`].
pub const ENV_PREFIX: &str = "ITUNES_";

/// Largest `limit` the catalog accepts.
const MAX_LIMIT: u32 = 200;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configured `default_limit` outside the catalog range.
    #[error("Invalid default_limit: {0}. Must be between 1 and 200")]
    InvalidLimit(u32),

    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Cache sized to hold nothing.
    #[error("Invalid cache_capacity: {0}. Must be at least 1")]
    InvalidCacheCapacity(u64),

    /// Zero HTTP timeout.
    #[error("Invalid http.timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and the environment
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Environment variables (ITUNES_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        Self::extract(Self::base())
    }

    /// Load configuration with a YAML file between defaults and environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn base() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// Base URL and request paths are not checked here; a request fails
    /// when it is built without them.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if let Some(limit) = config.default_limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(ConfigError::InvalidLimit(limit));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.cache_capacity == 0 {
            return Err(ConfigError::InvalidCacheCapacity(config.cache_capacity));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        Ok(())
    }
}
