//! Operations shared by the plain and the caching agent.
//!
//! Implementors provide `search` and `lookup`; region and media searches are
//! derived from those so both agents route them through one code path.

use async_trait::async_trait;

use crate::domain::errors::AgentResult;
use crate::domain::models::{MediaArg, MediaCall, MediaType, ParamValue, ParameterSet};

/// Search and lookup operations over the catalog.
#[async_trait]
pub trait CatalogAgent: Send + Sync {
    /// What every operation yields.
    type Output: Send;

    /// Search the catalog for `term`.
    async fn search(&self, term: &str, extra: ParameterSet) -> AgentResult<Self::Output>;

    /// Look up an item.
    ///
    /// With no `value`, `id` is the value and `"id"` the field, so
    /// `lookup("12345", None, ..)` is `lookup("id", Some("12345"), ..)`.
    async fn lookup(
        &self,
        id: ParamValue,
        value: Option<ParamValue>,
        extra: ParameterSet,
    ) -> AgentResult<Self::Output>;

    /// Search within a storefront region. A `country` in `extra` wins.
    async fn search_region(
        &self,
        region: &str,
        term: &str,
        extra: ParameterSet,
    ) -> AgentResult<Self::Output> {
        self.search(term, region_params(region).merge(extra)).await
    }

    /// Run a resolved media search.
    async fn media_search(&self, call: MediaCall) -> AgentResult<Self::Output> {
        let params = call.search_params();
        self.search(&call.term, params).await
    }

    /// Search one media type, e.g. `media(MediaType::Music, "song", ..)`.
    async fn media(
        &self,
        media: MediaType,
        term: &str,
        extra: ParameterSet,
    ) -> AgentResult<Self::Output> {
        self.media_search(MediaCall::new(media, term, extra)).await
    }

    /// Search one media type within a storefront region.
    async fn media_in_region(
        &self,
        media: MediaType,
        region: &str,
        term: &str,
        extra: ParameterSet,
    ) -> AgentResult<Self::Output> {
        self.media_search(MediaCall::in_region(media, region, term, extra))
            .await
    }

    /// Run a media search addressed by name, e.g. `call("tvShowInRegion", args)`.
    async fn call(&self, method: &str, args: Vec<MediaArg>) -> AgentResult<Self::Output> {
        let call = MediaCall::parse(method, args)?;
        self.media_search(call).await
    }
}

/// `{term}` with `extra` merged on top.
pub fn search_params(term: &str, extra: ParameterSet) -> ParameterSet {
    ParameterSet::new().with("term", term).merge(extra)
}

/// `{country: REGION}`.
pub fn region_params(region: &str) -> ParameterSet {
    ParameterSet::new().with("country", region.to_uppercase())
}

/// `{field: value}` with `extra` merged on top, defaulting the field to `id`.
pub fn lookup_params(id: ParamValue, value: Option<ParamValue>, extra: ParameterSet) -> ParameterSet {
    let (field, value) = match value {
        Some(value) if !value.is_falsy() => (id.to_string(), value),
        _ => ("id".to_string(), id),
    };
    ParameterSet::new().with(field, value).merge(extra)
}
