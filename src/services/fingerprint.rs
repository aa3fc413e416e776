//! Deterministic cache keys for catalog requests.

use crate::domain::models::{ParameterSet, RequestType};

/// Namespace every cache key starts with.
pub const CACHE_PREFIX: &str = "v:itunes";

/// `v:itunes:<type>:<md5 of the canonical query>`.
pub fn cache_key(request_type: RequestType, params: &ParameterSet) -> String {
    let digest = md5::compute(params.canonical_query().as_bytes());
    format!("{CACHE_PREFIX}:{request_type}:{digest:x}")
}
