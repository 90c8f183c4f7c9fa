//! Keyboard mapping from crossterm events to core messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use explorer_core::{AppViewModel, Msg, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Dispatch(Msg),
    Quit,
    Ignored,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> InputAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Quit,
        // Esc never quits: it closes the menu, else clears the search.
        (KeyCode::Esc, _) => {
            if view.sort_menu_open {
                InputAction::Dispatch(Msg::SortMenuDismissed)
            } else if view.query.is_empty() {
                InputAction::Ignored
            } else {
                InputAction::Dispatch(Msg::SearchInput(String::new()))
            }
        }
        (KeyCode::Tab, _) | (KeyCode::F(2), _) => InputAction::Dispatch(Msg::SortMenuToggled),
        (KeyCode::PageUp, _) | (KeyCode::Left, _) => InputAction::Dispatch(Msg::PrevPageClicked),
        (KeyCode::PageDown, _) | (KeyCode::Right, _) => {
            InputAction::Dispatch(Msg::NextPageClicked)
        }

        // With the menu open, digits pick an option instead of typing.
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) if view.sort_menu_open => {
            let index = c as usize - '1' as usize;
            InputAction::Dispatch(Msg::SortSelected(SortKey::OPTIONS[index]))
        }

        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if view.query.is_empty() {
                InputAction::Ignored
            } else {
                InputAction::Dispatch(Msg::SearchInput(String::new()))
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let mut text = view.query.clone();
            text.push(c);
            InputAction::Dispatch(Msg::SearchInput(text))
        }
        (KeyCode::Backspace, _) => {
            let mut text = view.query.clone();
            if text.pop().is_none() {
                return InputAction::Ignored;
            }
            InputAction::Dispatch(Msg::SearchInput(text))
        }
        _ => InputAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use explorer_core::{update, ApiKey, AppState};

    use super::*;

    fn view_with(query: &str, menu_open: bool) -> AppViewModel {
        let state = AppState::new(ApiKey::new("k"));
        let (state, _) = update(state, Msg::SearchInput(query.to_string()));
        let state = if menu_open {
            update(state, Msg::SortMenuToggled).0
        } else {
            state
        };
        state.view()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_to_query() {
        let view = view_with("ba", false);
        assert_eq!(
            map_key(press(KeyCode::Char('t')), &view),
            InputAction::Dispatch(Msg::SearchInput("bat".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT), &view),
            InputAction::Dispatch(Msg::SearchInput("baB".to_string()))
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view_with("bat", false)),
            InputAction::Dispatch(Msg::SearchInput("ba".to_string()))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view_with("", false)),
            InputAction::Ignored
        );
    }

    #[test]
    fn digits_type_when_menu_closed_and_select_when_open() {
        assert_eq!(
            map_key(press(KeyCode::Char('2')), &view_with("", false)),
            InputAction::Dispatch(Msg::SearchInput("2".to_string()))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('2')), &view_with("", true)),
            InputAction::Dispatch(Msg::SortSelected(SortKey::ReleaseDateDesc))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('4')), &view_with("", true)),
            InputAction::Dispatch(Msg::SortSelected(SortKey::RatingDesc))
        );
    }

    #[test]
    fn escape_closes_menu_or_clears_search_but_never_quits() {
        assert_eq!(
            map_key(press(KeyCode::Esc), &view_with("bat", true)),
            InputAction::Dispatch(Msg::SortMenuDismissed)
        );
        assert_eq!(
            map_key(press(KeyCode::Esc), &view_with("bat", false)),
            InputAction::Dispatch(Msg::SearchInput(String::new()))
        );
        assert_eq!(map_key(press(KeyCode::Esc), &view_with("", false)), InputAction::Ignored);
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &view_with("x", false)
            ),
            InputAction::Quit
        );
    }

    #[test]
    fn paging_keys() {
        let view = view_with("", false);
        assert_eq!(
            map_key(press(KeyCode::PageDown), &view),
            InputAction::Dispatch(Msg::NextPageClicked)
        );
        assert_eq!(
            map_key(press(KeyCode::Left), &view),
            InputAction::Dispatch(Msg::PrevPageClicked)
        );
    }
}
