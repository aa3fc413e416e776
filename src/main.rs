//! iTunes catalog CLI entry point.

use anyhow::Result;
use clap::Parser;

use itunes_agent::cli::commands::{self, build_agent};
use itunes_agent::cli::{Cli, Commands};
use itunes_agent::infrastructure::logging::LoggerImpl;
use itunes_agent::ConfigLoader;

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    }
    .with_overrides(cli.overrides());

    let _logger = LoggerImpl::init(&config.logging)?;
    let agent = build_agent(config, cli.no_cache)?;

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &agent, cli.json).await,
        Commands::Lookup(args) => commands::lookup::execute(args, &agent, cli.json).await,
        Commands::Media(args) => commands::media::execute(args, &agent, cli.json).await,
        Commands::Request(args) => commands::request::execute(&args, &agent, cli.json),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        itunes_agent::cli::handle_error(err, json);
    }
}
