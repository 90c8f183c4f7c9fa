use explorer_core::{Msg, SortKey};
use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::constants::*;

/// Screen regions from the last render, kept for mouse hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search: Rect,
    pub sort_toggle: Rect,
    pub cards: Vec<Rect>,
    pub prev_button: Rect,
    pub page_info: Rect,
    pub next_button: Rect,
    pub status: Rect,
    pub sort_menu: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let [header, controls, grid, pager, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(GRID_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [search, sort_toggle] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(SORT_BUTTON_WIDTH)])
                .areas(controls);

        let [prev_button, page_info, next_button] = Layout::horizontal([
            Constraint::Length(PAGER_BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(PAGER_BUTTON_WIDTH),
        ])
        .areas(pager);

        Self {
            header,
            search,
            sort_toggle,
            cards: grid_cells(grid),
            prev_button,
            page_info,
            next_button,
            status,
            sort_menu: sort_menu_area(sort_toggle, area),
        }
    }

    /// Rect of the `index`th sort option inside the menu border.
    pub fn sort_option(&self, index: usize) -> Option<Rect> {
        let menu = self.sort_menu;
        let row = menu.y.checked_add(1)?.checked_add(u16::try_from(index).ok()?)?;
        if index >= SortKey::OPTIONS.len() || row + 1 >= menu.bottom() {
            return None;
        }
        Some(Rect::new(
            menu.x.saturating_add(1),
            row,
            menu.width.saturating_sub(2),
            1,
        ))
    }

    /// Translates a left click into messages.
    ///
    /// While the menu is open, any click outside both the toggle and the menu
    /// dismisses it and then still reaches whatever was clicked.
    pub fn hit_test(&self, column: u16, row: u16, menu_open: bool) -> Vec<Msg> {
        let point = Position::new(column, row);
        if self.sort_toggle.contains(point) {
            return vec![Msg::SortMenuToggled];
        }

        let mut msgs = Vec::new();
        if menu_open {
            if self.sort_menu.contains(point) {
                return SortKey::OPTIONS
                    .iter()
                    .enumerate()
                    .find(|(index, _)| {
                        self.sort_option(*index)
                            .is_some_and(|rect| rect.contains(point))
                    })
                    .map(|(_, key)| vec![Msg::SortSelected(*key)])
                    .unwrap_or_default();
            }
            msgs.push(Msg::SortMenuDismissed);
        }

        if self.prev_button.contains(point) {
            msgs.push(Msg::PrevPageClicked);
        } else if self.next_button.contains(point) {
            msgs.push(Msg::NextPageClicked);
        }
        msgs
    }
}

fn grid_cells(grid: Rect) -> Vec<Rect> {
    let rows = Layout::vertical(vec![Constraint::Ratio(1, u32::from(GRID_ROWS)); GRID_ROWS as usize])
        .split(grid);
    rows.iter()
        .flat_map(|row| {
            Layout::horizontal(vec![
                Constraint::Ratio(1, u32::from(GRID_COLUMNS));
                GRID_COLUMNS as usize
            ])
            .split(*row)
            .to_vec()
        })
        .collect()
}

/// The menu hangs below the toggle, right-aligned with it, clipped to the screen.
fn sort_menu_area(toggle: Rect, screen: Rect) -> Rect {
    let height = SortKey::OPTIONS.len() as u16 + 2;
    let width = SORT_MENU_WIDTH.min(screen.width);
    let x = toggle.right().saturating_sub(width).max(screen.x);
    Rect::new(x, toggle.bottom(), width, height).intersection(screen)
}
