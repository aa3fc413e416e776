//! HTTP transport port.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::errors::AgentResult;
use crate::domain::models::RequestDescriptor;

/// Transport port for issuing catalog requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET for `request` and parse the response body as JSON.
    ///
    /// Returns `Ok(None)` when the body is empty or not valid JSON.
    /// Network failures are returned as errors, never retried.
    async fn get(&self, request: &RequestDescriptor) -> AgentResult<Option<Value>>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, request: &RequestDescriptor) -> AgentResult<Option<Value>> {
        (**self).get(request).await
    }
}
