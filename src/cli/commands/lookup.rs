//! Implementation of the `itunes lookup` command.

use anyhow::Result;

use super::{CliAgent, ResultsOutput};
use crate::cli::output::output;
use crate::cli::types::{to_parameter_set, LookupArgs};
use crate::domain::models::ParamValue;
use crate::services::CatalogAgent;

/// Look up items and print the results.
pub async fn execute(args: LookupArgs, agent: &CliAgent, json_mode: bool) -> Result<()> {
    let body = agent
        .lookup(
            ParamValue::from(args.id),
            args.value.map(ParamValue::from),
            to_parameter_set(&args.params),
        )
        .await?;

    output(&ResultsOutput::from_serialized(&body)?, json_mode);
    Ok(())
}
