use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub language: String,
    /// `None` waits forever, which is the default.
    pub connect_timeout: Option<Duration>,
    /// `None` waits forever, which is the default.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Popular,
    /// Search text, already trimmed and non-empty.
    Search(String),
}

impl Listing {
    pub fn path(&self) -> &'static str {
        match self {
            Listing::Popular => "movie/popular",
            Listing::Search(_) => "search/movie",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MovieRequest {
    pub listing: Listing,
    pub page: u32,
    pub api_key: String,
}

impl fmt::Debug for MovieRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieRequest")
            .field("listing", &self.listing)
            .field("page", &self.page)
            .field("api_key", &"***")
            .finish()
    }
}

/// Builds the GET url for `request`, e.g. `{base}/search/movie?api_key=..&language=..&page=2&query=..`.
pub fn build_url(settings: &ApiSettings, request: &MovieRequest) -> Result<Url, FetchError> {
    let raw = format!(
        "{}/{}",
        settings.base_url.trim_end_matches('/'),
        request.listing.path()
    );
    let mut url =
        Url::parse(&raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("api_key", &request.api_key)
            .append_pair("language", &settings.language)
            .append_pair("page", &request.page.to_string());
        if let Listing::Search(query) = &request.listing {
            pairs.append_pair("query", query);
        }
    }
    Ok(url)
}
