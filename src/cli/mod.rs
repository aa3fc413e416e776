//! Command-line interface for the catalog agent.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::AgentError;

/// Print `err` in the requested format and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let exit_code = match err.downcast_ref::<AgentError>() {
        Some(AgentError::Configuration { .. }) => 78,
        Some(AgentError::InvalidSearch(_)) => 64,
        _ => 1,
    };

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(exit_code)
}
