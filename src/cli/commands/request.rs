//! Implementation of the `itunes request` command.

use anyhow::Result;

use super::CliAgent;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::{to_parameter_set, RequestArgs};
use crate::domain::models::RequestDescriptor;

/// A built request as printed by `itunes request`.
#[derive(Debug, serde::Serialize)]
pub struct RequestOutput {
    /// Target URL.
    pub url: String,
    /// Query parameters in send order.
    pub params: Vec<(String, String)>,
}

impl From<RequestDescriptor> for RequestOutput {
    fn from(request: RequestDescriptor) -> Self {
        Self {
            url: request.url,
            params: request.params.to_query_pairs(),
        }
    }
}

impl CommandOutput for RequestOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("GET {}", self.url)];
        for (key, value) in &self.params {
            lines.push(format!("  {key} = {value}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::json!({ "url": self.url, "params": params })
    }
}

/// Print the request the given type and parameters would send.
pub fn execute(args: &RequestArgs, agent: &CliAgent, json_mode: bool) -> Result<()> {
    let request = agent.request(args.request_type.as_str(), to_parameter_set(&args.params))?;
    output(&RequestOutput::from(request), json_mode);
    Ok(())
}
