//! Implementation of the `itunes media` command.

use anyhow::Result;

use super::{CliAgent, ResultsOutput};
use crate::cli::output::output;
use crate::cli::types::{to_parameter_set, MediaArgs};
use crate::domain::models::MediaArg;
use crate::services::CatalogAgent;

/// Positional arguments as the agent expects them, `--param` pairs last.
pub fn media_args(args: &MediaArgs) -> Vec<MediaArg> {
    let mut positional: Vec<MediaArg> = args.args.iter().cloned().map(MediaArg::from).collect();
    if !args.params.is_empty() {
        positional.push(MediaArg::Params(to_parameter_set(&args.params)));
    }
    positional
}

/// Run a named media search and print the results.
pub async fn execute(args: MediaArgs, agent: &CliAgent, json_mode: bool) -> Result<()> {
    let body = agent.call(&args.method, media_args(&args)).await?;

    output(&ResultsOutput::from_serialized(&body)?, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_params_become_trailing_argument() {
        let args = MediaArgs {
            method: "musicInRegion".to_string(),
            args: vec!["ae".to_string(), "song".to_string()],
            params: vec![("entity".to_string(), "album".to_string())],
        };

        assert_eq!(
            media_args(&args),
            vec![
                MediaArg::from("ae"),
                MediaArg::from("song"),
                MediaArg::Params(params! { "entity" => "album" }),
            ]
        );
    }
}
