//! Translation of an operation and its parameters into a transport-ready request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{Config, FALLBACK_LIMIT};
use super::params::ParameterSet;
use crate::domain::errors::{AgentError, AgentResult};

/// Catalog operation a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// `GET <search_path>`.
    Search,
    /// `GET <lookup_path>`.
    Lookup,
}

impl RequestType {
    /// Lowercase name, as used in cache keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Lookup => "lookup",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything other than `"lookup"` is a search.
impl From<&str> for RequestType {
    fn from(value: &str) -> Self {
        if value == "lookup" {
            Self::Lookup
        } else {
            Self::Search
        }
    }
}

/// A fully resolved request: target URL plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Base URL joined with the operation path.
    pub url: String,
    /// Query parameters, `limit` included for searches.
    pub params: ParameterSet,
}

/// Builds [`RequestDescriptor`]s from configuration.
pub struct RequestBuilder;

impl RequestBuilder {
    /// Resolve `request_type` and `params` against `config`.
    ///
    /// Searches get a `limit` from configuration (or 50) underneath the
    /// caller's parameters. Lookups are sent as given.
    ///
    /// All of base URL, search path and lookup path are required for either
    /// request type, even though each type only uses one of the paths.
    pub fn build(
        request_type: RequestType,
        params: ParameterSet,
        config: &Config,
    ) -> AgentResult<RequestDescriptor> {
        let host = required(config.api_base_url.as_deref(), "api_base_url")?;
        let search_path = required(config.search_path.as_deref(), "search_path")?;
        let lookup_path = required(config.lookup_path.as_deref(), "lookup_path")?;

        let (path, params) = match request_type {
            RequestType::Search => {
                let limit = config.default_limit.unwrap_or(FALLBACK_LIMIT);
                let defaults = ParameterSet::new().with("limit", limit);
                (search_path, defaults.merge(params))
            }
            RequestType::Lookup => (lookup_path, params),
        };

        Ok(RequestDescriptor {
            url: format!("{host}{path}"),
            params,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> AgentResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AgentError::Configuration { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ParamValue;
    use crate::params;

    #[test]
    fn test_search_request() {
        let config = Config::default();
        let request =
            RequestBuilder::build(RequestType::Search, params! { "term" => "abou ali" }, &config)
                .unwrap();

        assert_eq!(request.url, "https://itunes.apple.com/search");
        assert_eq!(request.params, params! { "term" => "abou ali", "limit" => 50 });
    }

    #[test]
    fn test_search_keeps_caller_params() {
        let config = Config::default();
        let given = params! { "country" => "Lebanon", "term" => "colorado" };
        let request = RequestBuilder::build(RequestType::Search, given.clone(), &config).unwrap();

        assert_eq!(request.params, params! { "limit" => 50 }.merge(given));
    }

    #[test]
    fn test_custom_limit_overrides_default() {
        let config = Config::default();
        let request =
            RequestBuilder::build(RequestType::Search, params! { "limit" => 10 }, &config).unwrap();
        assert_eq!(request.params.get("limit"), Some(&ParamValue::Integer(10)));
    }

    #[test]
    fn test_configured_limit_is_injected() {
        let config = Config {
            default_limit: Some(25),
            ..Default::default()
        };
        let request = RequestBuilder::build(RequestType::Search, ParameterSet::new(), &config).unwrap();
        assert_eq!(request.params, params! { "limit" => 25 });
    }

    #[test]
    fn test_absent_limit_falls_back_to_fifty() {
        let config = Config {
            default_limit: None,
            ..Default::default()
        };
        let request = RequestBuilder::build(RequestType::Search, ParameterSet::new(), &config).unwrap();
        assert_eq!(request.params.get("limit"), Some(&ParamValue::Integer(50)));
    }

    #[test]
    fn test_lookup_request_has_no_defaults() {
        let config = Config::default();
        let request =
            RequestBuilder::build(RequestType::Lookup, params! { "id" => "artistId" }, &config)
                .unwrap();

        assert_eq!(request.url, "https://itunes.apple.com/lookup");
        assert_eq!(request.params, params! { "id" => "artistId" });
    }

    #[test]
    fn test_unknown_type_is_search() {
        assert_eq!(RequestType::from("lookup"), RequestType::Lookup);
        assert_eq!(RequestType::from("search"), RequestType::Search);
        assert_eq!(RequestType::from("whatever"), RequestType::Search);
        assert_eq!(RequestType::from(""), RequestType::Search);
    }

    #[test]
    fn test_fails_with_no_search_path_for_both_types() {
        let config = Config {
            search_path: None,
            ..Default::default()
        };
        for request_type in [RequestType::Search, RequestType::Lookup] {
            let err = RequestBuilder::build(request_type, ParameterSet::new(), &config).unwrap_err();
            assert!(matches!(err, AgentError::Configuration { field: "search_path" }));
        }
    }

    #[test]
    fn test_fails_with_no_lookup_path_for_both_types() {
        let config = Config {
            lookup_path: None,
            ..Default::default()
        };
        for request_type in [RequestType::Search, RequestType::Lookup] {
            let err = RequestBuilder::build(request_type, ParameterSet::new(), &config).unwrap_err();
            assert!(matches!(err, AgentError::Configuration { field: "lookup_path" }));
        }
    }

    #[test]
    fn test_fails_with_empty_api_url() {
        let config = Config {
            api_base_url: Some(String::new()),
            ..Default::default()
        };
        let err = RequestBuilder::build(RequestType::Search, params! { "ter" => "whatever" }, &config)
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
