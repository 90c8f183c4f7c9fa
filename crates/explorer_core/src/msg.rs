use crate::{Generation, Movie, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub movies: Vec<Movie>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The UI is mounted; starts the first fetch cycle.
    Started,
    /// User edited the search box. Carries the full raw input text.
    SearchInput(String),
    /// User clicked Previous.
    PrevPageClicked,
    /// User clicked Next.
    NextPageClicked,
    /// User clicked the sort toggle.
    SortMenuToggled,
    /// User picked an entry from the sort menu.
    SortSelected(SortKey),
    /// Pointer interaction outside both the toggle and the menu.
    SortMenuDismissed,
    /// Engine completion for a fetch cycle.
    FetchSucceeded {
        generation: Generation,
        page: FetchedPage,
    },
    /// Engine failure for a fetch cycle.
    FetchFailed {
        generation: Generation,
        message: Option<String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
