use explorer_logging::{explorer_debug, explorer_warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, FetchError, MoviePage, MovieSummary};

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    #[serde(default)]
    results: Value,
    #[serde(default)]
    total_pages: Value,
    #[serde(default)]
    status_message: Value,
}

#[derive(Debug, Default, Deserialize)]
struct RawMovie {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    release_date: Value,
    #[serde(default)]
    vote_average: Value,
    #[serde(default)]
    poster_path: Value,
}

/// Decodes a listing/search response body.
///
/// Only a body that is not JSON at all is an error. Any JSON shape decodes:
/// a missing or non-array `results` gives no movies, non-object entries are
/// skipped, and a missing or invalid `total_pages` becomes 1.
pub fn decode_page(bytes: &[u8]) -> Result<MoviePage, FetchError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::InvalidBody, err.to_string()))?;
    let raw: RawPage = if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        explorer_debug!("Ignoring non-object response body: {}", type_name(&value));
        RawPage::default()
    };

    if let Some(message) = raw.status_message.as_str() {
        explorer_warn!("API reported status message: {}", message);
    }

    let movies: Vec<MovieSummary> = match raw.results {
        Value::Array(items) => items.into_iter().filter_map(decode_movie).collect(),
        Value::Null => Vec::new(),
        other => {
            explorer_debug!("Ignoring non-array results field: {}", type_name(&other));
            Vec::new()
        }
    };

    Ok(MoviePage {
        movies,
        total_pages: decode_total_pages(&raw.total_pages),
    })
}

fn decode_movie(item: Value) -> Option<MovieSummary> {
    if !item.is_object() {
        return None;
    }
    let raw: RawMovie = serde_json::from_value(item).ok()?;
    Some(MovieSummary {
        id: match raw.id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            _ => String::new(),
        },
        title: raw.title.as_str().unwrap_or_default().to_string(),
        release_date: raw.release_date.as_str().map(ToOwned::to_owned),
        vote_average: raw.vote_average.as_f64(),
        poster_path: raw.poster_path.as_str().map(ToOwned::to_owned),
    })
}

fn decode_total_pages(value: &Value) -> u32 {
    let pages = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|pages| pages.fract() == 0.0 && *pages >= 1.0)
            .map(|pages| pages as u64)
    });
    match pages {
        Some(pages) if pages >= 1 => u32::try_from(pages).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
