pub const APP_TITLE: &str = "Movie Explorer";
pub const SEARCH_PLACEHOLDER: &str = "Search for a movie...";
pub const SORT_BUTTON_LABEL: &str = "Sort By ▾";
pub const SORT_MENU_TITLE: &str = "Sort By";
pub const PREV_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const KEY_HINTS: &str =
    "type to search | PgUp/PgDn page | Tab sort menu (1-4 pick) | Esc close/clear | Ctrl-C quit";

pub const GRID_COLUMNS: u16 = 4;
pub const GRID_ROWS: u16 = 5;

pub const SORT_MENU_WIDTH: u16 = 26;
pub const SORT_BUTTON_WIDTH: u16 = 14;
pub const PAGER_BUTTON_WIDTH: u16 = 12;
