use std::fmt;
use std::str::FromStr;

/// Client-side ordering applied to the fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    /// Keep the order the API returned.
    #[default]
    Unsorted,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    /// The selectable keys, in menu order.
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::ReleaseDateAsc,
        SortKey::ReleaseDateDesc,
        SortKey::RatingAsc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Unsorted => "",
            SortKey::ReleaseDateAsc => "release_date.asc",
            SortKey::ReleaseDateDesc => "release_date.desc",
            SortKey::RatingAsc => "vote_average.asc",
            SortKey::RatingDesc => "vote_average.desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Unsorted => "Default",
            SortKey::ReleaseDateAsc => "Release Date (Asc)",
            SortKey::ReleaseDateDesc => "Release Date (Desc)",
            SortKey::RatingAsc => "Rating (Asc)",
            SortKey::RatingDesc => "Rating (Desc)",
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortKey::ReleaseDateAsc | SortKey::RatingAsc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key {0:?}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::Unsorted),
            "release_date.asc" => Ok(SortKey::ReleaseDateAsc),
            "release_date.desc" => Ok(SortKey::ReleaseDateDesc),
            "vote_average.asc" => Ok(SortKey::RatingAsc),
            "vote_average.desc" => Ok(SortKey::RatingDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// The page/search-text/sort-key tuple driving fetch and view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    /// Search text as captured: leading whitespace stripped, trailing kept.
    pub query: String,
    pub sort_key: SortKey,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            sort_key: SortKey::Unsorted,
        }
    }
}

impl QueryState {
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }
}

/// Which listing a fetch cycle targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Popular,
    Search { query: String },
}

impl Endpoint {
    /// Search when the trimmed query is non-empty, the popular listing otherwise.
    pub fn for_query(query: &QueryState) -> Self {
        match query.trimmed_query() {
            "" => Endpoint::Popular,
            text => Endpoint::Search {
                query: text.to_string(),
            },
        }
    }
}
