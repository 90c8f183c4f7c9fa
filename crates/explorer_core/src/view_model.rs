use crate::{project, ErrorBanner, Movie, MovieId, SortKey};

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/200x300?text=No+Image";
pub const PLACEHOLDER_CARD_COUNT: usize = 20;
pub const LOADING_LABEL: &str = "Loading…";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub query: String,
    pub sort_key: SortKey,
    pub sort_menu_open: bool,
    pub page: u32,
    pub total_pages: u32,
    pub page_label: String,
    pub can_prev: bool,
    pub can_next: bool,
    pub loading: bool,
    pub cards: Vec<CardView>,
    pub error: Option<ErrorBanner>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Placeholder,
    Movie(MovieCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    pub release_date_label: String,
    pub rating_label: String,
    pub poster_url: String,
}

impl From<&Movie> for MovieCard {
    fn from(movie: &Movie) -> Self {
        let release_date_label = movie
            .release_date
            .as_deref()
            .filter(|date| !date.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();
        let rating_label = movie
            .vote_average
            .map(|rating| format!("{rating:.1}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let poster_url = match movie.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{POSTER_BASE_URL}{path}"),
            _ => POSTER_PLACEHOLDER_URL.to_string(),
        };
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            release_date_label,
            rating_label,
            poster_url,
        }
    }
}

pub(crate) fn cards(results: &[Movie], sort_key: SortKey, loading: bool) -> Vec<CardView> {
    if loading {
        return vec![CardView::Placeholder; PLACEHOLDER_CARD_COUNT];
    }
    project(results, sort_key)
        .iter()
        .map(|movie| CardView::Movie(MovieCard::from(movie)))
        .collect()
}

pub(crate) fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page, total_pages.max(1))
}
