//! Movie explorer core: pure state machine, sort projection and view-model helpers.
mod effect;
mod movie;
mod msg;
mod projection;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, FetchRequest};
pub use movie::{Movie, MovieId};
pub use msg::{FetchedPage, Msg};
pub use projection::{project, MAX_VISIBLE_MOVIES};
pub use query::{Endpoint, ParseSortKeyError, QueryState, SortKey};
pub use state::{
    ApiKey, AppState, ErrorBanner, ErrorKind, Generation, FETCH_FALLBACK_MESSAGE,
    MISSING_API_KEY_MESSAGE,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CardView, MovieCard, LOADING_LABEL, NOT_AVAILABLE, PLACEHOLDER_CARD_COUNT,
    POSTER_BASE_URL, POSTER_PLACEHOLDER_URL,
};
