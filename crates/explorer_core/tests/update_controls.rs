use explorer_core::{
    update, ApiKey, AppState, CardView, Effect, FetchedPage, Movie, Msg, SortKey, NOT_AVAILABLE,
    POSTER_BASE_URL, POSTER_PLACEHOLDER_URL,
};

fn loaded(total_pages: u32, movies: Vec<Movie>) -> AppState {
    let (state, effects) = update(AppState::new(ApiKey::new("secret")), Msg::Started);
    let generation = match effects.as_slice() {
        [Effect::FetchMovies { generation, .. }] => *generation,
        other => panic!("unexpected effects {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            generation,
            page: FetchedPage {
                movies,
                total_pages,
            },
        },
    );
    state.consume_dirty();
    state
}

fn complete_latest(state: AppState, total_pages: u32) -> AppState {
    let generation = state.generation();
    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            generation,
            page: FetchedPage {
                movies: Vec::new(),
                total_pages,
            },
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn previous_disabled_on_first_page() {
    let mut state = loaded(5, Vec::new());
    let view = state.view();
    assert!(!view.can_prev);
    assert!(view.can_next);

    let (mut next, effects) = update(state.clone(), Msg::PrevPageClicked);
    assert!(effects.is_empty());
    assert_eq!(next.query().page, 1);
    assert!(!next.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn next_disabled_on_last_page() {
    let mut state = loaded(5, Vec::new());
    for expected in 2..=5 {
        let (next, effects) = update(state, Msg::NextPageClicked);
        assert_eq!(effects.len(), 1);
        assert_eq!(next.query().page, expected);
        state = complete_latest(next, 5);
    }

    let view = state.view();
    assert!(!view.can_next);
    assert!(view.can_prev);
    assert_eq!(view.page_label, "Page 5 of 5");

    let (next, effects) = update(state, Msg::NextPageClicked);
    assert!(effects.is_empty());
    assert_eq!(next.query().page, 5);
}

#[test]
fn paging_moves_by_one_and_refetches() {
    let state = loaded(3, Vec::new());
    let (state, effects) = update(state, Msg::NextPageClicked);
    match effects.as_slice() {
        [Effect::FetchMovies { request, .. }] => assert_eq!(request.page, 2),
        other => panic!("unexpected effects {other:?}"),
    }
    let state = complete_latest(state, 3);
    let (state, effects) = update(state, Msg::PrevPageClicked);
    assert_eq!(state.query().page, 1);
    assert_eq!(effects.len(), 1);
}

#[test]
fn sorting_never_triggers_a_fetch() {
    let movies = vec![
        Movie::new(1u64, "Low").with_vote_average(3.0),
        Movie::new(2u64, "High").with_vote_average(9.0),
    ];
    let state = loaded(1, movies);
    let generation = state.generation();

    let (state, effects) = update(state, Msg::SortSelected(SortKey::RatingDesc));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SortSelected(SortKey::RatingAsc));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SortSelected(SortKey::RatingDesc));
    assert!(effects.is_empty());

    assert_eq!(state.generation(), generation);
    assert_eq!(state.query().sort_key, SortKey::RatingDesc);
    let titles: Vec<String> = state
        .view()
        .cards
        .into_iter()
        .filter_map(|card| match card {
            CardView::Movie(movie) => Some(movie.title),
            CardView::Placeholder => None,
        })
        .collect();
    assert_eq!(titles, vec!["High", "Low"]);
}

#[test]
fn sort_change_keeps_current_page() {
    let state = loaded(4, Vec::new());
    let (state, _) = update(state, Msg::NextPageClicked);
    let state = complete_latest(state, 4);
    let (state, _) = update(state, Msg::SortSelected(SortKey::ReleaseDateAsc));
    assert_eq!(state.query().page, 2);
}

#[test]
fn sort_menu_toggles_and_dismisses() {
    let state = loaded(1, Vec::new());
    assert!(!state.sort_menu_open());

    let (state, _) = update(state, Msg::SortMenuToggled);
    assert!(state.sort_menu_open());

    // Choosing an option happens inside the menu, so it stays open.
    let (state, _) = update(state, Msg::SortSelected(SortKey::RatingAsc));
    assert!(state.sort_menu_open());

    let (mut state, effects) = update(state, Msg::SortMenuDismissed);
    assert!(effects.is_empty());
    assert!(!state.sort_menu_open());
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SortMenuDismissed);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::SortMenuToggled);
    let (state, _) = update(state, Msg::SortMenuToggled);
    assert!(!state.sort_menu_open());
}

#[test]
fn movie_cards_format_missing_fields() {
    let movies = vec![
        Movie::new(1u64, "Complete")
            .with_release_date("1999-03-31")
            .with_vote_average(8.26)
            .with_poster_path("/abc.jpg"),
        Movie::new(2u64, "Sparse"),
        Movie::new(3u64, "Blank").with_release_date("").with_poster_path(""),
    ];
    let view = loaded(1, movies).view();

    let cards: Vec<_> = view
        .cards
        .into_iter()
        .map(|card| match card {
            CardView::Movie(movie) => movie,
            CardView::Placeholder => panic!("not loading"),
        })
        .collect();

    assert_eq!(cards[0].release_date_label, "1999-03-31");
    assert_eq!(cards[0].rating_label, "8.3");
    assert_eq!(cards[0].poster_url, format!("{POSTER_BASE_URL}/abc.jpg"));

    assert_eq!(cards[1].release_date_label, NOT_AVAILABLE);
    assert_eq!(cards[1].rating_label, NOT_AVAILABLE);
    assert_eq!(cards[1].poster_url, POSTER_PLACEHOLDER_URL);

    assert_eq!(cards[2].release_date_label, NOT_AVAILABLE);
    assert_eq!(cards[2].poster_url, POSTER_PLACEHOLDER_URL);
}
