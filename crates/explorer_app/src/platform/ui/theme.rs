//! Colors and styles for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub error: Color,
    pub border: Color,
    pub dimmed: Color,
    pub rating: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            rating: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn active_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.accent)
    }

    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn rating_style(&self) -> Style {
        Style::default().fg(self.rating)
    }
}
