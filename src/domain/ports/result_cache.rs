//! Result cache port.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::AgentResult;

/// Cache port for serialized catalog results.
///
/// Expiration is owned by the implementation: an entry stored with `ttl`
/// must stop being returned by [`get`](Self::get) once `ttl` has elapsed.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Fetch a live entry.
    async fn get(&self, key: &str) -> AgentResult<Option<String>>;

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    async fn put(&self, key: &str, value: String, ttl: Duration) -> AgentResult<()>;
}

#[async_trait]
impl<C: ResultCache + ?Sized> ResultCache for Arc<C> {
    async fn get(&self, key: &str) -> AgentResult<Option<String>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> AgentResult<()> {
        (**self).put(key, value, ttl).await
    }
}
