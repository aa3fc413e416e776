//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::{ConfigOverrides, ParameterSet};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "itunes")]
#[command(about = "Search and look up items in the iTunes catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// YAML configuration file merged over the built-in defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the default search limit
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Minutes to cache results for (0 disables caching)
    #[arg(long, global = true)]
    pub cache_minutes: Option<u64>,

    /// Do not cache results
    #[arg(long, global = true)]
    pub no_cache: bool,
}

impl Cli {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.base_url.clone(),
            default_limit: self.limit,
            cache_ttl_minutes: self.cache_minutes,
            ..Default::default()
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog for a term
    Search(SearchArgs),

    /// Look up items by id or another id field
    Lookup(LookupArgs),

    /// Search a media type by name, e.g. `music <term>` or `musicInRegion <region> <term>`
    Media(MediaArgs),

    /// Print the request a search or lookup would send
    Request(RequestArgs),
}

/// Arguments of `itunes search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term
    pub term: String,

    /// Storefront country code
    #[arg(long)]
    pub country: Option<String>,

    /// Media type to search (music, movie, podcast, ...)
    #[arg(short, long)]
    pub media: Option<String>,

    /// Result entity (song, album, musicArtist, ...)
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Extra query parameters (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Arguments of `itunes lookup`.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Id to look up, or the id field name when VALUE is given
    pub id: String,

    /// Value for the id field
    pub value: Option<String>,

    /// Extra query parameters (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Arguments of `itunes media`.
#[derive(Args, Debug)]
pub struct MediaArgs {
    /// Media search name: `<media>` or `<media>InRegion`
    pub method: String,

    /// Positional arguments: term, or region and term
    pub args: Vec<String>,

    /// Extra query parameters (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Arguments of `itunes request`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Request type: `lookup`, anything else is a search
    #[arg(value_name = "TYPE")]
    pub request_type: String,

    /// Query parameters (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Parse a `KEY=VALUE` pair.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Collect `KEY=VALUE` pairs into a parameter set, later pairs winning.
pub fn to_parameter_set(pairs: &[(String, String)]) -> ParameterSet {
    pairs.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}
