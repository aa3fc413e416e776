//! Agent configuration and its shipped defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Catalog host, e.g. `https://itunes.apple.com`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Option<String>,

    /// Path appended to the host for search requests
    #[serde(default = "default_search_path")]
    pub search_path: Option<String>,

    /// Path appended to the host for lookup requests
    #[serde(default = "default_lookup_path")]
    pub lookup_path: Option<String>,

    /// `limit` injected into every search (1-200)
    #[serde(default = "default_limit")]
    pub default_limit: Option<u32>,

    /// Minutes a cached result stays valid
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Maximum number of results held by the in-memory cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Limit used when neither configuration nor caller supplies one.
pub const FALLBACK_LIMIT: u32 = 50;

#[allow(clippy::unnecessary_wraps)]
fn default_api_base_url() -> Option<String> {
    Some("https://itunes.apple.com".to_string())
}

#[allow(clippy::unnecessary_wraps)]
fn default_search_path() -> Option<String> {
    Some("/search".to_string())
}

#[allow(clippy::unnecessary_wraps)]
fn default_lookup_path() -> Option<String> {
    Some("/lookup".to_string())
}

#[allow(clippy::unnecessary_wraps)]
const fn default_limit() -> Option<u32> {
    Some(FALLBACK_LIMIT)
}

const fn default_cache_ttl_minutes() -> u64 {
    60
}

const fn default_cache_capacity() -> u64 {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            search_path: default_search_path(),
            lookup_path: default_lookup_path(),
            default_limit: default_limit(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            cache_capacity: default_cache_capacity(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Apply caller-supplied values on top of this configuration.
    ///
    /// Every `Some` in `overrides` replaces the corresponding value here;
    /// `None` leaves the baseline untouched.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = Some(url);
        }
        if let Some(path) = overrides.search_path {
            self.search_path = Some(path);
        }
        if let Some(path) = overrides.lookup_path {
            self.lookup_path = Some(path);
        }
        if let Some(limit) = overrides.default_limit {
            self.default_limit = Some(limit);
        }
        if let Some(minutes) = overrides.cache_ttl_minutes {
            self.cache_ttl_minutes = minutes;
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.cache_capacity = capacity;
        }
        self
    }
}

/// Optional values merged over a baseline [`Config`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ConfigOverrides {
    /// Replaces `Config::api_base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Replaces `Config::search_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_path: Option<String>,
    /// Replaces `Config::lookup_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_path: Option<String>,
    /// Replaces `Config::default_limit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u32>,
    /// Replaces `Config::cache_ttl_minutes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_minutes: Option<u64>,
    /// Replaces `Config::cache_capacity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<u64>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("itunes-agent/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily-rotated JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
