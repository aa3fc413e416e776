//! Domain errors for the catalog agent.

use thiserror::Error;

/// Errors surfaced by the agent and its collaborators.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A required configuration entry is absent or empty at request-build time.
    #[error("Incomplete configuration: missing {field}")]
    Configuration {
        /// Name of the missing `Config` field.
        field: &'static str,
    },

    /// A media search was invoked without its required positional arguments.
    #[error("Missing arguments for search: {0}")]
    InvalidSearch(String),

    /// The transport failed to deliver a response.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The cache backend failed.
    #[error("Cache error: {0}")]
    Cache(String),

    /// A result could not be serialized for the cache.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Wrap an error raised by an HTTP transport adapter.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }

    /// Whether this error stems from incomplete configuration.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error stems from a malformed media search call.
    pub const fn is_invalid_search(&self) -> bool {
        matches!(self, Self::InvalidSearch(_))
    }
}

/// Result alias for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;
