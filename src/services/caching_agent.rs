//! Read-through caching decorator for [`Agent`].
//!
//! Results are stored serialized, so hits are returned as-is without
//! touching the transport. Keys come from [`cache_key`] over the final
//! request parameters, `limit` included.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

use super::agent::Agent;
use super::catalog::{lookup_params, search_params, CatalogAgent};
use super::fingerprint::cache_key;
use crate::domain::errors::AgentResult;
use crate::domain::models::{ParamValue, ParameterSet, RequestDescriptor, RequestType};
use crate::domain::ports::{HttpTransport, ResultCache};

/// Agent decorator caching serialized results in a [`ResultCache`].
pub struct CachingAgent<T: HttpTransport, C: ResultCache> {
    agent: Agent<T>,
    cache: C,
    /// Effective TTL in minutes; 0 bypasses the cache.
    ttl_minutes: AtomicU64,
}

impl<T: HttpTransport, C: ResultCache> CachingAgent<T, C> {
    /// Wrap `agent`, starting with its configured TTL.
    pub fn new(agent: Agent<T>, cache: C) -> Self {
        let ttl_minutes = AtomicU64::new(agent.config().cache_ttl_minutes);
        Self {
            agent,
            cache,
            ttl_minutes,
        }
    }

    /// Cache results of subsequent calls for `minutes`.
    pub fn cache_for(&self, minutes: u64) -> u64 {
        self.ttl_minutes.store(minutes, Ordering::Relaxed);
        minutes
    }

    /// The TTL applied to the next stored result.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes.load(Ordering::Relaxed).saturating_mul(60))
    }

    /// See [`Agent::request`].
    pub fn request(
        &self,
        request_type: impl Into<RequestType>,
        params: ParameterSet,
    ) -> AgentResult<RequestDescriptor> {
        self.agent.request(request_type, params)
    }

    /// Serve from cache, or fetch, store and return the serialized result.
    #[instrument(skip(self, params))]
    async fn remember(&self, request_type: RequestType, params: ParameterSet) -> AgentResult<String> {
        let ttl = self.ttl();
        if ttl.is_zero() {
            debug!("caching disabled, fetching directly");
            let result = self.agent.fetch(request_type, params).await?;
            return Ok(serde_json::to_string(&result)?);
        }

        let request = self.agent.request(request_type, params)?;
        let key = cache_key(request_type, &request.params);
        if let Some(hit) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        debug!(%key, ttl_secs = ttl.as_secs(), "cache miss");
        let result = self.agent.send(&request).await?;
        let serialized = serde_json::to_string(&result)?;
        self.cache.put(&key, serialized.clone(), ttl).await?;
        Ok(serialized)
    }
}

#[async_trait]
impl<T: HttpTransport, C: ResultCache> CatalogAgent for CachingAgent<T, C> {
    type Output = String;

    async fn search(&self, term: &str, extra: ParameterSet) -> AgentResult<String> {
        self.remember(RequestType::Search, search_params(term, extra))
            .await
    }

    async fn lookup(
        &self,
        id: ParamValue,
        value: Option<ParamValue>,
        extra: ParameterSet,
    ) -> AgentResult<String> {
        self.remember(RequestType::Lookup, lookup_params(id, value, extra))
            .await
    }
}
