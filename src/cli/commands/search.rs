//! Implementation of the `itunes search` command.

use anyhow::Result;

use super::{CliAgent, ResultsOutput};
use crate::cli::output::output;
use crate::cli::types::{to_parameter_set, SearchArgs};
use crate::domain::models::ParameterSet;
use crate::services::CatalogAgent;

/// Parameters implied by the dedicated flags, before `--param` pairs.
fn flag_params(args: &SearchArgs) -> ParameterSet {
    let mut params = ParameterSet::new();
    if let Some(media) = &args.media {
        params.insert("media", media.as_str());
    }
    if let Some(entity) = &args.entity {
        params.insert("entity", entity.as_str());
    }
    params
}

/// Run a search, within `--country` when given, and print the results.
pub async fn execute(args: SearchArgs, agent: &CliAgent, json_mode: bool) -> Result<()> {
    let extra = flag_params(&args).merge(to_parameter_set(&args.params));

    let body = match args.country {
        Some(ref region) => agent.search_region(region, &args.term, extra).await?,
        None => agent.search(&args.term, extra).await?,
    };

    output(&ResultsOutput::from_serialized(&body)?, json_mode);
    Ok(())
}
