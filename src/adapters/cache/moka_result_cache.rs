//! Result cache backed by moka with per-entry expiry.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::errors::AgentResult;
use crate::domain::ports::ResultCache;

/// Default maximum number of cached results.
const DEFAULT_MAX_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone)]
struct CachedPayload {
    body: Arc<str>,
    ttl: Duration,
}

/// Expires every entry after the TTL it was stored with.
struct PayloadExpiry;

impl Expiry<String, CachedPayload> for PayloadExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedPayload,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedPayload,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process [`ResultCache`].
#[derive(Clone)]
pub struct MokaResultCache {
    entries: Cache<String, CachedPayload>,
}

impl MokaResultCache {
    /// Create a cache holding at most `max_capacity` results.
    pub fn new(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PayloadExpiry)
            .build();

        Self { entries }
    }
}

impl Default for MokaResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY)
    }
}

#[async_trait]
impl ResultCache for MokaResultCache {
    async fn get(&self, key: &str) -> AgentResult<Option<String>> {
        Ok(self.entries.get(key).await.map(|payload| payload.body.to_string()))
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> AgentResult<()> {
        let payload = CachedPayload {
            body: Arc::from(value),
            ttl,
        };
        self.entries.insert(key.to_string(), payload).await;
        Ok(())
    }
}
