//! Null result cache implementation.
//!
//! Used when caching is disabled but the agent still needs a
//! ResultCache implementation.

use async_trait::async_trait;
use std::time::Duration;

use super::ResultCache;
use crate::domain::errors::AgentResult;

/// A no-op cache that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResultCache;

impl NullResultCache {
    /// Create the no-op cache.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultCache for NullResultCache {
    async fn get(&self, _key: &str) -> AgentResult<Option<String>> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: String, _ttl: Duration) -> AgentResult<()> {
        Ok(())
    }
}
