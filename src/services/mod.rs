//! Agent services: the catalog agent, its caching decorator and cache keys.

pub mod agent;
pub mod caching_agent;
pub mod catalog;
pub mod fingerprint;

pub use agent::Agent;
pub use caching_agent::CachingAgent;
pub use catalog::{lookup_params, region_params, search_params, CatalogAgent};
pub use fingerprint::{cache_key, CACHE_PREFIX};
