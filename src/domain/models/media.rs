//! Media-type searches addressed by name.
//!
//! `music("song")` or `musicInRegion("ae", "song")` style calls are resolved
//! here into a term plus the parameters that pin the `media` (and `country`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::params::ParameterSet;
use crate::domain::errors::{AgentError, AgentResult};

/// Suffix marking a media search scoped to a storefront region.
pub const IN_REGION_SUFFIX: &str = "InRegion";

/// Catalog media categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    /// `movie`
    Movie,
    /// `podcast`
    Podcast,
    /// `music`
    Music,
    /// `musicVideo`
    MusicVideo,
    /// `audiobook`
    Audiobook,
    /// `shortFilm`
    ShortFilm,
    /// `tvShow`
    TvShow,
    /// `software`
    Software,
    /// `ebook`
    Ebook,
    /// `all`
    All,
    /// Passed to the catalog verbatim.
    Other(String),
}

impl MediaType {
    /// Every documented media category.
    pub const KNOWN: [Self; 10] = [
        Self::Movie,
        Self::Podcast,
        Self::Music,
        Self::MusicVideo,
        Self::Audiobook,
        Self::ShortFilm,
        Self::TvShow,
        Self::Software,
        Self::Ebook,
        Self::All,
    ];

    /// Value sent as the `media` query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Movie => "movie",
            Self::Podcast => "podcast",
            Self::Music => "music",
            Self::MusicVideo => "musicVideo",
            Self::Audiobook => "audiobook",
            Self::ShortFilm => "shortFilm",
            Self::TvShow => "tvShow",
            Self::Software => "software",
            Self::Ebook => "ebook",
            Self::All => "all",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MediaType {
    fn from(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|media| media.as_str() == name)
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl From<String> for MediaType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<MediaType> for String {
    fn from(media: MediaType) -> Self {
        media.as_str().to_string()
    }
}

/// A positional argument of a named media search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaArg {
    /// A region or a term.
    Text(String),
    /// Extra query parameters.
    Params(ParameterSet),
}

impl MediaArg {
    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Params(_) => None,
        }
    }
}

impl From<&str> for MediaArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MediaArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ParameterSet> for MediaArg {
    fn from(value: ParameterSet) -> Self {
        Self::Params(value)
    }
}

/// A resolved media search: which media, optional region, term and extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCall {
    /// Media searched.
    pub media: MediaType,
    /// Storefront country, upper-cased when sent.
    pub region: Option<String>,
    /// Search term.
    pub term: String,
    /// Caller parameters; `media` and `country` override them.
    pub extra: ParameterSet,
}

impl MediaCall {
    /// Search `media` for `term` in the default storefront.
    pub fn new(media: MediaType, term: impl Into<String>, extra: ParameterSet) -> Self {
        Self {
            media,
            region: None,
            term: term.into(),
            extra,
        }
    }

    /// Search `media` for `term` in the `region` storefront.
    pub fn in_region(
        media: MediaType,
        region: impl Into<String>,
        term: impl Into<String>,
        extra: ParameterSet,
    ) -> Self {
        Self {
            media,
            region: Some(region.into()),
            term: term.into(),
            extra,
        }
    }

    /// Resolve a method name such as `tvShow` or `musicInRegion` and its
    /// positional arguments.
    ///
    /// A trailing [`MediaArg::Params`] after the required arguments is taken
    /// as extra parameters.
    pub fn parse(method: &str, args: Vec<MediaArg>) -> AgentResult<Self> {
        let (media, regional) = match method.strip_suffix(IN_REGION_SUFFIX) {
            Some(media) if !media.is_empty() => (media, true),
            _ => (method, false),
        };
        if media.is_empty() {
            return Err(AgentError::InvalidSearch("no media type given".to_string()));
        }

        let required = if regional { 2 } else { 1 };
        let texts: Vec<&str> = args.iter().take(required).filter_map(MediaArg::as_text).collect();
        if texts.len() < required {
            let reason = if regional {
                format!("{method} expects a region and a term")
            } else {
                format!("{method} expects a term")
            };
            return Err(AgentError::InvalidSearch(reason));
        }

        let extra = match args.last() {
            Some(MediaArg::Params(params)) if args.len() > 1 => params.clone(),
            _ => ParameterSet::new(),
        };

        let media = MediaType::from(media);
        Ok(if regional {
            Self::in_region(media, texts[0], texts[1], extra)
        } else {
            Self::new(media, texts[0], extra)
        })
    }

    /// Parameters passed alongside the term.
    ///
    /// Extras go first; `country` and `media` are laid over them, so callers
    /// cannot redirect a media search through its extra parameters.
    pub fn search_params(&self) -> ParameterSet {
        let mut pinned = ParameterSet::new();
        if let Some(region) = &self.region {
            pinned.insert("country", region.to_uppercase());
        }
        pinned.insert("media", self.media.as_str());
        self.extra.clone().merge(pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_media_alias_table() {
        assert_eq!(MediaType::from("music"), MediaType::Music);
        assert_eq!(MediaType::from("tvShow"), MediaType::TvShow);
        assert_eq!(MediaType::from("musicVideo").as_str(), "musicVideo");
        assert_eq!(MediaType::from("mix"), MediaType::Other("mix".to_string()));
    }

    #[test]
    fn test_parse_plain_media_call() {
        let call = MediaCall::parse("music", vec!["my itsy bitsy song".into()]).unwrap();
        assert_eq!(call.media, MediaType::Music);
        assert_eq!(call.region, None);
        assert_eq!(call.term, "my itsy bitsy song");
        assert_eq!(call.search_params(), params! { "media" => "music" });
    }

    #[test]
    fn test_parse_region_call_uppercases_country() {
        let call = MediaCall::parse("musicInRegion", vec!["ae".into(), "my itsy bitsy song".into()])
            .unwrap();
        assert_eq!(call.term, "my itsy bitsy song");
        assert_eq!(call.search_params(), params! { "media" => "music", "country" => "AE" });
    }

    #[test]
    fn test_trailing_params_cannot_override_media_or_country() {
        let extra = params! { "media" => "movie", "country" => "US", "entity" => "song" };
        let call = MediaCall::parse(
            "musicInRegion",
            vec!["lb".into(), "fairuz".into(), extra.into()],
        )
        .unwrap();

        assert_eq!(
            call.search_params(),
            params! { "entity" => "song", "media" => "music", "country" => "LB" }
        );
    }

    #[test]
    fn test_trailing_params_for_plain_call() {
        let call = MediaCall::parse("tvShow", vec!["friends".into(), params! { "limit" => 5 }.into()])
            .unwrap();
        assert_eq!(call.search_params(), params! { "limit" => 5, "media" => "tvShow" });
    }

    #[test]
    fn test_missing_arguments_fail() {
        let err = MediaCall::parse("music", vec![]).unwrap_err();
        assert!(err.is_invalid_search());

        let err = MediaCall::parse("musicInRegion", vec![]).unwrap_err();
        assert!(err.is_invalid_search());

        let err = MediaCall::parse("musicInRegion", vec!["ae".into()]).unwrap_err();
        assert!(err.is_invalid_search());

        let err = MediaCall::parse("music", vec![ParameterSet::new().into()]).unwrap_err();
        assert!(err.is_invalid_search());
    }

    #[test]
    fn test_bare_suffix_is_a_media_name() {
        let call = MediaCall::parse("InRegion", vec!["x".into()]).unwrap();
        assert_eq!(call.media, MediaType::Other("InRegion".to_string()));
    }
}
