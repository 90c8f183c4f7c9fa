use futures_util::StreamExt;

use explorer_logging::{explorer_debug, explorer_warn};

use crate::{
    build_url, decode_page, ApiSettings, FailureKind, FetchError, Listing, MoviePage, MovieRequest,
};

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &MovieRequest) -> Result<MoviePage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: &MovieRequest) -> Result<MoviePage, FetchError> {
        let url = build_url(&self.settings, request)?;
        explorer_debug!(
            "GET {} page={} search={}",
            request.listing.path(),
            request.page,
            matches!(request.listing, Listing::Search(_))
        );

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        // Error statuses are not failures by themselves; the body decides.
        let status = response.status();
        if !status.is_success() {
            explorer_warn!("{} answered with {}", request.listing.path(), status);
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_page(&bytes)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    // `without_url` keeps the api_key query parameter out of messages.
    let err = err.without_url();
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
