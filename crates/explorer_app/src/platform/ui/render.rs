use explorer_core::{AppViewModel, CardView, ErrorKind, MovieCard, SortKey, LOADING_LABEL};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::constants::*;
use super::layout::ScreenLayout;
use super::theme::Theme;

/// Draws the whole screen and returns the regions used, for hit testing.
pub fn render(frame: &mut Frame, view: &AppViewModel, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(APP_TITLE, theme.title_style())).alignment(Alignment::Center),
        layout.header,
    );
    render_search(frame, layout.search, view, theme);
    render_sort_toggle(frame, layout.sort_toggle, view, theme);

    for (area, card) in layout.cards.iter().zip(view.cards.iter()) {
        render_card(frame, *area, card, theme);
    }

    render_pager(frame, &layout, view, theme);
    render_status(frame, layout.status, view, theme);

    if view.sort_menu_open {
        render_sort_menu(frame, &layout, view.sort_key, theme);
    }
    layout
}

fn render_search(frame: &mut Frame, area: Rect, view: &AppViewModel, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Search ");
    let line = if view.query.is_empty() {
        Line::styled(SEARCH_PLACEHOLDER, theme.dimmed_style())
    } else {
        Line::from(vec![Span::raw(view.query.as_str()), Span::raw("│")])
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_sort_toggle(frame: &mut Frame, area: Rect, view: &AppViewModel, theme: &Theme) {
    let style = if view.sort_menu_open {
        theme.active_style()
    } else {
        theme.border_style()
    };
    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(
        Paragraph::new(SORT_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(if view.sort_menu_open {
                theme.active_style()
            } else {
                Style::default()
            })
            .block(block),
        area,
    );
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, theme: &Theme) {
    match card {
        CardView::Placeholder => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.dimmed_style());
            frame.render_widget(
                Paragraph::new(Line::styled(LOADING_LABEL, theme.dimmed_style()))
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
        }
        CardView::Movie(movie) => render_movie(frame, area, movie, theme),
    }
}

fn render_movie(frame: &mut Frame, area: Rect, movie: &MovieCard, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Line::styled(movie.title.as_str(), theme.title_style()));
    let lines = vec![
        Line::from(format!("Release Date: {}", movie.release_date_label)),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(movie.rating_label.as_str(), theme.rating_style()),
        ]),
        Line::styled(movie.poster_url.as_str(), theme.dimmed_style()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_pager(frame: &mut Frame, layout: &ScreenLayout, view: &AppViewModel, theme: &Theme) {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            theme.title_style()
        } else {
            theme.disabled_style()
        };
        Paragraph::new(Line::styled(format!("[ {label} ]"), style)).alignment(Alignment::Center)
    };
    frame.render_widget(button(PREV_LABEL, view.can_prev), layout.prev_button);
    frame.render_widget(
        Paragraph::new(view.page_label.as_str()).alignment(Alignment::Center),
        layout.page_info,
    );
    frame.render_widget(button(NEXT_LABEL, view.can_next), layout.next_button);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel, theme: &Theme) {
    let line = match &view.error {
        Some(error) => {
            let prefix = match error.kind {
                ErrorKind::Configuration => "Configuration error: ",
                ErrorKind::Fetch => "Error: ",
            };
            Line::styled(format!("{prefix}{}", error.message), theme.error_style())
        }
        None => Line::styled(KEY_HINTS, theme.dimmed_style()),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_sort_menu(frame: &mut Frame, layout: &ScreenLayout, current: SortKey, theme: &Theme) {
    let menu = layout.sort_menu;
    frame.render_widget(Clear, menu);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.title_style())
            .title(format!(" {SORT_MENU_TITLE} ")),
        menu,
    );
    for (index, key) in SortKey::OPTIONS.iter().enumerate() {
        let Some(area) = layout.sort_option(index) else {
            continue;
        };
        let marker = if *key == current { "●" } else { " " };
        let text = format!("{} {} {}", index + 1, marker, key.label());
        let line = if *key == current {
            Line::styled(text, theme.active_style())
        } else {
            Line::from(text)
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
