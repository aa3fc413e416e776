//! iTunes Agent - catalog search client
//!
//! A small client for the iTunes Search API that builds search and lookup
//! requests from configuration, executes them over HTTP, and optionally
//! serves repeated requests from a read-through cache.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): configuration, parameters, request building, errors
//! - **Ports** (`domain::ports`): the HTTP transport and result cache contracts
//! - **Service Layer** (`services`): the agent and its caching decorator
//! - **Adapters** (`adapters`): reqwest transport and moka cache
//! - **Infrastructure Layer** (`infrastructure`): configuration loading and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use itunes_agent::{Agent, CatalogAgent, Config, ParameterSet, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let agent = Agent::new(config.clone(), ReqwestTransport::new(&config.http)?);
//!     let results = agent.search("abou ali", ParameterSet::new()).await?;
//!     println!("{} results", results.results_count);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::MokaResultCache;
pub use adapters::http::ReqwestTransport;
pub use domain::errors::{AgentError, AgentResult};
pub use domain::models::{
    Config, ConfigOverrides, HttpConfig, LoggingConfig, MediaArg, MediaCall, MediaType,
    ParamValue, ParameterSet, RequestBuilder, RequestDescriptor, RequestType, SearchResult,
};
pub use domain::ports::{HttpTransport, NullResultCache, ResultCache};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{Agent, CachingAgent, CatalogAgent};
