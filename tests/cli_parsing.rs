//! Command-line parsing tests.

use clap::Parser;
use itunes_agent::cli::{Cli, Commands};

#[test]
fn test_parse_search() {
    let cli = Cli::try_parse_from(vec![
        "itunes",
        "search",
        "jack johnson",
        "--country",
        "us",
        "--entity",
        "album",
        "-p",
        "lang=en_us",
    ])
    .unwrap();

    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.term, "jack johnson");
            assert_eq!(args.country.as_deref(), Some("us"));
            assert_eq!(args.entity.as_deref(), Some("album"));
            assert!(args.media.is_none());
            assert_eq!(args.params, vec![("lang".to_string(), "en_us".to_string())]);
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
    assert!(!cli.no_cache);
}

#[test]
fn test_parse_lookup_with_field() {
    let cli = Cli::try_parse_from(vec!["itunes", "lookup", "amgArtistId", "468749"]).unwrap();

    match cli.command {
        Commands::Lookup(args) => {
            assert_eq!(args.id, "amgArtistId");
            assert_eq!(args.value.as_deref(), Some("468749"));
            assert!(args.params.is_empty());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_lookup_id_only() {
    let cli = Cli::try_parse_from(vec!["itunes", "lookup", "909253"]).unwrap();

    match cli.command {
        Commands::Lookup(args) => {
            assert_eq!(args.id, "909253");
            assert!(args.value.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_media_in_region() {
    let cli = Cli::try_parse_from(vec![
        "itunes",
        "media",
        "musicInRegion",
        "ae",
        "my itsy bitsy song",
        "--param",
        "entity=song",
    ])
    .unwrap();

    match cli.command {
        Commands::Media(args) => {
            assert_eq!(args.method, "musicInRegion");
            assert_eq!(args.args, vec!["ae", "my itsy bitsy song"]);
            assert_eq!(args.params.len(), 1);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_request() {
    let cli = Cli::try_parse_from(vec!["itunes", "request", "lookup", "-p", "id=1"]).unwrap();

    match cli.command {
        Commands::Request(args) => {
            assert_eq!(args.request_type, "lookup");
            assert_eq!(args.params, vec![("id".to_string(), "1".to_string())]);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(vec![
        "itunes",
        "search",
        "x",
        "--json",
        "--no-cache",
        "--limit",
        "10",
        "--cache-minutes",
        "0",
        "--base-url",
        "http://localhost:9000",
    ])
    .unwrap();

    assert!(cli.json);
    assert!(cli.no_cache);

    let overrides = cli.overrides();
    assert_eq!(overrides.default_limit, Some(10));
    assert_eq!(overrides.cache_ttl_minutes, Some(0));
    assert_eq!(overrides.api_base_url.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn test_malformed_param_is_rejected() {
    assert!(Cli::try_parse_from(vec!["itunes", "search", "x", "-p", "novalue"]).is_err());
}

#[test]
fn test_missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(vec!["itunes"]).is_err());
}
