//! Environment configuration for the terminal app.
//!
//! Only the API key is required, and even its absence is not fatal here: the
//! core reports it in the UI and never issues a request.

use std::str::FromStr;

use explorer_core::ApiKey;
use explorer_engine::ApiSettings;
use log::LevelFilter;

pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const BASE_URL_VAR: &str = "TMDB_API_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "MOVIE_EXPLORER_LOG";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be one of off, error, warn, info, debug, trace (got {value:?})")]
    InvalidLogLevel { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    EmptyBaseUrl { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<ApiKey>,
    pub api: ApiSettings,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR).and_then(ApiKey::new);

        let mut api = ApiSettings::default();
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            let base_url = base_url.trim();
            if base_url.is_empty() {
                return Err(ConfigError::EmptyBaseUrl { var: BASE_URL_VAR });
            }
            api.base_url = base_url.to_string();
        }

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => LevelFilter::from_str(raw.trim()).map_err(|_| {
                ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: raw,
                }
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            api_key,
            api,
            log_level,
        })
    }
}
