use std::fmt;

use explorer_logging::explorer_debug;

use crate::view_model::{self, AppViewModel};
use crate::{Effect, Endpoint, FetchRequest, FetchedPage, Movie, QueryState, SortKey};

/// Monotonic counter identifying a fetch cycle; only the latest one may touch state.
pub type Generation = u64;

pub const MISSING_API_KEY_MESSAGE: &str =
    "API key not found. Set the TMDB_API_KEY environment variable. See the README.";
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load movies";

/// Credential for the movie API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty key, which counts as absent.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential; needs reconfiguration and a restart.
    Configuration,
    /// A fetch cycle failed; the next page/query change retries.
    Fetch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    query: QueryState,
    api_key: Option<ApiKey>,
    results: Vec<Movie>,
    total_pages: u32,
    loading: bool,
    error: Option<ErrorBanner>,
    sort_menu_open: bool,
    generation: Generation,
    /// `(page, query)` of the most recently started fetch cycle.
    last_cycle: Option<(u32, String)>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppState {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            query: QueryState::default(),
            api_key,
            results: Vec::new(),
            total_pages: 1,
            loading: false,
            error: None,
            sort_menu_open: false,
            generation: 0,
            last_cycle: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.query.clone(),
            sort_key: self.query.sort_key,
            sort_menu_open: self.sort_menu_open,
            page: self.query.page,
            total_pages: self.total_pages,
            page_label: view_model::page_label(self.query.page, self.total_pages),
            can_prev: self.can_prev(),
            can_next: self.can_next(),
            loading: self.loading,
            cards: view_model::cards(&self.results, self.query.sort_key, self.loading),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ErrorBanner> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn sort_menu_open(&self) -> bool {
        self.sort_menu_open
    }

    pub fn can_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.query.page < self.total_pages
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        if self.query.query != text || self.query.page != 1 {
            self.query.query = text;
            self.query.page = 1;
            self.dirty = true;
        }
    }

    pub(crate) fn step_page(&mut self, forward: bool) -> bool {
        if forward && self.can_next() {
            self.query.page += 1;
        } else if !forward && self.can_prev() {
            self.query.page -= 1;
        } else {
            return false;
        }
        self.dirty = true;
        true
    }

    pub(crate) fn set_sort_key(&mut self, sort_key: SortKey) {
        if self.query.sort_key != sort_key {
            self.query.sort_key = sort_key;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_sort_menu(&mut self) {
        self.sort_menu_open = !self.sort_menu_open;
        self.dirty = true;
    }

    pub(crate) fn close_sort_menu(&mut self) {
        if self.sort_menu_open {
            self.sort_menu_open = false;
            self.dirty = true;
        }
    }

    /// Starts a fetch cycle unless one for the current `(page, query)` was already started.
    pub(crate) fn fetch_if_changed(&mut self) -> Option<Effect> {
        let current = (self.query.page, self.query.query.clone());
        if self.last_cycle.as_ref() == Some(&current) {
            return None;
        }
        self.begin_fetch_cycle()
    }

    pub(crate) fn begin_fetch_cycle(&mut self) -> Option<Effect> {
        self.last_cycle = Some((self.query.page, self.query.query.clone()));
        self.dirty = true;

        let Some(api_key) = self.api_key.clone() else {
            self.error = Some(ErrorBanner {
                kind: ErrorKind::Configuration,
                message: MISSING_API_KEY_MESSAGE.to_string(),
            });
            return None;
        };

        self.generation += 1;
        self.loading = true;
        self.error = None;
        Some(Effect::FetchMovies {
            generation: self.generation,
            request: FetchRequest {
                endpoint: Endpoint::for_query(&self.query),
                page: self.query.page,
                api_key,
            },
        })
    }

    pub(crate) fn apply_success(&mut self, generation: Generation, page: FetchedPage) {
        if !self.is_current(generation) {
            return;
        }
        self.results = page.movies;
        self.total_pages = page.total_pages.max(1);
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, generation: Generation, message: Option<String>) {
        if !self.is_current(generation) {
            return;
        }
        // Previous results stay on screen; only the banner and loading flag change.
        let message = message
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string());
        self.error = Some(ErrorBanner {
            kind: ErrorKind::Fetch,
            message,
        });
        self.loading = false;
        self.dirty = true;
    }

    fn is_current(&self, generation: Generation) -> bool {
        if generation == self.generation {
            return true;
        }
        explorer_debug!(
            "Discarding stale fetch result generation={} latest={}",
            generation,
            self.generation
        );
        false
    }
}
