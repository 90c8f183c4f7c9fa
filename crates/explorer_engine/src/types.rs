use std::fmt;

/// Fetch cycle identifier, echoed back untouched with the completion.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<MovieSummary>,
    /// Always at least 1.
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    FetchCompleted {
        generation: Generation,
        result: Result<MoviePage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// The body was not JSON.
    InvalidBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
