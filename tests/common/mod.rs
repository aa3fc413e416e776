//! Common test utilities for integration tests
//!
//! Provides a mocked catalog server and agents wired against it.

#![allow(dead_code)]

use itunes_agent::{Agent, CachingAgent, Config, ConfigOverrides, MokaResultCache, ReqwestTransport};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Default configuration pointed at `server`.
pub fn config_for(server: &MockServer) -> Config {
    Config::default().with_overrides(ConfigOverrides {
        api_base_url: Some(server.uri()),
        ..Default::default()
    })
}

/// Plain agent talking to `server`.
pub fn agent_for(server: &MockServer) -> Agent<ReqwestTransport> {
    let config = config_for(server);
    let transport = ReqwestTransport::new(&config.http).expect("Failed to build transport");
    Agent::new(config, transport)
}

/// Caching agent talking to `server`.
pub fn caching_agent_for(server: &MockServer) -> CachingAgent<ReqwestTransport, MokaResultCache> {
    CachingAgent::new(agent_for(server), MokaResultCache::new(100))
}

/// A catalog response holding one track.
pub fn track_payload(name: &str) -> Value {
    json!({
        "resultCount": 1,
        "results": [{
            "wrapperType": "track",
            "kind": "song",
            "artistName": "Jack Johnson",
            "trackName": name
        }]
    })
}
