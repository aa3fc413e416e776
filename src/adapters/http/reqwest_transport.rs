//! reqwest-backed catalog transport.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::errors::{AgentError, AgentResult};
use crate::domain::models::{HttpConfig, RequestDescriptor};
use crate::domain::ports::HttpTransport;

/// HTTP transport for the catalog API
///
/// Features:
/// - Connection pooling and reuse (via reqwest::Client)
/// - Configurable whole-request timeout
/// - Query parameters encoded in insertion order
///
/// Status codes are not interpreted: whatever body comes back is parsed.
#[derive(Clone)]
pub struct ReqwestTransport {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,
}

impl ReqwestTransport {
    /// Build a transport with a pooled client configured from `config`.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &RequestDescriptor) -> AgentResult<Option<Value>> {
        let response = self
            .http_client
            .get(&request.url)
            .query(&request.params.to_query_pairs())
            .send()
            .await
            .map_err(AgentError::transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AgentError::transport)?;
        debug!(%status, bytes = body.len(), "catalog response received");

        if body.is_empty() {
            return Ok(None);
        }
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(%status, error = %err, "catalog response is not JSON");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_from_default_config() {
        assert!(ReqwestTransport::new(&HttpConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let transport = ReqwestTransport::new(&HttpConfig {
            timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();
        let request = RequestDescriptor {
            url: "http://127.0.0.1:9/search".to_string(),
            params: crate::params! { "term" => "x" },
        };

        let err = transport.get(&request).await.unwrap_err();
        assert!(matches!(err, AgentError::Transport(_)));
    }
}
