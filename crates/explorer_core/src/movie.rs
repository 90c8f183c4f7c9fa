use chrono::{DateTime, NaiveDate};

/// Upstream movie identifier, kept as text so numeric and string ids both survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieId(pub String);

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            release_date: None,
            vote_average: None,
            poster_path: None,
        }
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_vote_average(mut self, rating: f64) -> Self {
        self.vote_average = Some(rating);
        self
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    /// Release date as milliseconds since the Unix epoch.
    ///
    /// Missing, empty and unparseable dates all count as the epoch itself, so
    /// they sort as the earliest date among post-1970 releases.
    pub fn release_timestamp(&self) -> i64 {
        self.release_date
            .as_deref()
            .and_then(parse_date_millis)
            .unwrap_or(0)
    }

    /// Rating used for ordering; missing ratings count as zero.
    pub fn rating_value(&self) -> f64 {
        self.vote_average.unwrap_or(0.0)
    }
}

fn parse_date_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date_millis(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.timestamp_millis());
    }
    // Partial dates: "YYYY-MM" and "YYYY" resolve to the first day of the period.
    let mut parts = raw.splitn(2, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = match parts.next() {
        Some(month) => month.parse::<u32>().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1).and_then(date_millis)
}

fn date_millis(date: NaiveDate) -> Option<i64> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}
