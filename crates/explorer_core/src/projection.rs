use std::cmp::Ordering;

use crate::{Movie, SortKey};

/// Upper bound on rendered movie cards per page.
pub const MAX_VISIBLE_MOVIES: usize = 20;

/// Orders `results` by `sort_key` and keeps at most [`MAX_VISIBLE_MOVIES`].
///
/// The sort is stable: ties keep the order the API returned them in.
pub fn project(results: &[Movie], sort_key: SortKey) -> Vec<Movie> {
    let mut items = results.to_vec();
    let compare: fn(&Movie, &Movie) -> Ordering = match sort_key {
        SortKey::Unsorted => {
            items.truncate(MAX_VISIBLE_MOVIES);
            return items;
        }
        SortKey::ReleaseDateAsc | SortKey::ReleaseDateDesc => {
            |a: &Movie, b: &Movie| a.release_timestamp().cmp(&b.release_timestamp())
        }
        SortKey::RatingAsc | SortKey::RatingDesc => {
            |a: &Movie, b: &Movie| a.rating_value().total_cmp(&b.rating_value())
        }
    };

    if sort_key.is_ascending() {
        items.sort_by(compare);
    } else {
        items.sort_by(|a, b| compare(b, a));
    }
    items.truncate(MAX_VISIBLE_MOVIES);
    items
}
