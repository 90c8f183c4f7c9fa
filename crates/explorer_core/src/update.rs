use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effect = match msg {
        Msg::Started => state.begin_fetch_cycle(),
        Msg::SearchInput(raw) => {
            // Only leading whitespace is stripped here; the full trim happens per request.
            state.set_search_text(raw.trim_start().to_string());
            state.fetch_if_changed()
        }
        Msg::PrevPageClicked => {
            if state.step_page(false) {
                state.fetch_if_changed()
            } else {
                None
            }
        }
        Msg::NextPageClicked => {
            if state.step_page(true) {
                state.fetch_if_changed()
            } else {
                None
            }
        }
        Msg::SortMenuToggled => {
            state.toggle_sort_menu();
            None
        }
        Msg::SortSelected(sort_key) => {
            // Ordering is local to the fetched page; never refetch for it.
            state.set_sort_key(sort_key);
            None
        }
        Msg::SortMenuDismissed => {
            state.close_sort_menu();
            None
        }
        Msg::FetchSucceeded { generation, page } => {
            state.apply_success(generation, page);
            None
        }
        Msg::FetchFailed {
            generation,
            message,
        } => {
            state.apply_failure(generation, message);
            None
        }
        Msg::NoOp => None,
    };

    (state, effect.into_iter().collect())
}
