//! Movie explorer engine: HTTP requests against the movie API and effect execution.
mod decode;
mod engine;
mod fetch;
mod request;
mod types;

pub use decode::decode_page;
pub use engine::EngineHandle;
pub use fetch::{Fetcher, ReqwestFetcher};
pub use request::{build_url, ApiSettings, Listing, MovieRequest, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
pub use types::{EngineEvent, FailureKind, FetchError, Generation, MoviePage, MovieSummary};
