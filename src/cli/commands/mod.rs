//! CLI command implementations.

pub mod lookup;
pub mod media;
pub mod request;
pub mod search;

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::cache::MokaResultCache;
use crate::adapters::http::ReqwestTransport;
use crate::cli::output::{truncate, CommandOutput};
use crate::domain::models::{Config, SearchResult};
use crate::domain::ports::{NullResultCache, ResultCache};
use crate::services::{Agent, CachingAgent};

/// Agent type every command runs against.
pub type CliAgent = CachingAgent<ReqwestTransport, Arc<dyn ResultCache>>;

/// Build the agent for a command invocation.
///
/// With `no_cache` the agent gets a cache that stores nothing.
pub fn build_agent(config: Config, no_cache: bool) -> Result<CliAgent> {
    let transport = ReqwestTransport::new(&config.http)?;
    let cache: Arc<dyn ResultCache> = if no_cache {
        Arc::new(NullResultCache::new())
    } else {
        Arc::new(MokaResultCache::new(config.cache_capacity))
    };
    Ok(CachingAgent::new(Agent::new(config, transport), cache))
}

/// Search or lookup results as printed by the CLI.
#[derive(Debug, serde::Serialize)]
pub struct ResultsOutput {
    /// Number of results reported upstream.
    #[serde(rename = "resultsCount")]
    pub results_count: u64,
    /// Result records as returned.
    pub results: Vec<Value>,
}

impl ResultsOutput {
    /// Parse the serialized result returned by the agent.
    pub fn from_serialized(body: &str) -> Result<Self> {
        let result: SearchResult =
            serde_json::from_str(body).context("Agent returned an unreadable result")?;
        Ok(Self {
            results_count: result.results_count,
            results: result.results,
        })
    }
}

fn text_field<'a>(item: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
        .unwrap_or("-")
}

impl CommandOutput for ResultsOutput {
    fn to_human(&self) -> String {
        if self.results.is_empty() {
            return "No results found.".to_string();
        }

        let mut lines = vec![format!("Found {} result(s):\n", self.results_count)];
        lines.push(format!("{:<12} {:<40} {:<30}", "KIND", "NAME", "ARTIST"));
        lines.push("-".repeat(84));

        for item in &self.results {
            lines.push(format!(
                "{:<12} {:<40} {:<30}",
                truncate(text_field(item, &["kind", "wrapperType"]), 12),
                truncate(text_field(item, &["trackName", "collectionName", "artistName"]), 40),
                truncate(text_field(item, &["artistName"]), 30),
            ));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
