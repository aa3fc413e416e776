//! The catalog agent: builds requests, performs them, normalizes results.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::catalog::{lookup_params, search_params, CatalogAgent};
use crate::domain::errors::AgentResult;
use crate::domain::models::{
    Config, ParamValue, ParameterSet, RequestBuilder, RequestDescriptor, RequestType, SearchResult,
};
use crate::domain::ports::HttpTransport;

/// Agent performing catalog requests over an [`HttpTransport`].
pub struct Agent<T: HttpTransport> {
    config: Config,
    transport: T,
}

impl<T: HttpTransport> Agent<T> {
    /// Create an agent for `config` sending through `transport`.
    pub const fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Configuration requests are built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Build the request an operation would send, without sending it.
    pub fn request(
        &self,
        request_type: impl Into<RequestType>,
        params: ParameterSet,
    ) -> AgentResult<RequestDescriptor> {
        RequestBuilder::build(request_type.into(), params, &self.config)
    }

    /// Build, send and normalize one request.
    #[instrument(skip(self, params))]
    pub async fn fetch(
        &self,
        request_type: RequestType,
        params: ParameterSet,
    ) -> AgentResult<SearchResult> {
        let request = self.request(request_type, params)?;
        self.send(&request).await
    }

    /// Send an already built request and normalize its payload.
    pub async fn send(&self, request: &RequestDescriptor) -> AgentResult<SearchResult> {
        debug!(url = %request.url, params = %request.params.canonical_query(), "sending request");

        let payload = self.transport.get(request).await?;
        let result = SearchResult::from_payload(payload);
        info!(url = %request.url, results = result.results_count, "catalog request completed");
        Ok(result)
    }
}

#[async_trait]
impl<T: HttpTransport> CatalogAgent for Agent<T> {
    type Output = SearchResult;

    async fn search(&self, term: &str, extra: ParameterSet) -> AgentResult<SearchResult> {
        self.fetch(RequestType::Search, search_params(term, extra))
            .await
    }

    async fn lookup(
        &self,
        id: ParamValue,
        value: Option<ParamValue>,
        extra: ParameterSet,
    ) -> AgentResult<SearchResult> {
        self.fetch(RequestType::Lookup, lookup_params(id, value, extra))
            .await
    }
}
