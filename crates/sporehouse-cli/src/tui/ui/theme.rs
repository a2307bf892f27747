//! Dashboard palettes and the bordered panel every widget sits in.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

/// Colors for one theme: Tailwind 400 shades on dark, 600 on light.
#[derive(Debug, Clone, Copy)]
pub struct AppTheme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub temperature: Color,
    pub humidity: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Border of unfocused panels.
    pub border: Color,
    /// Background of the selected range button.
    pub highlight_bg: Color,
    pub header_bg: Color,
}

impl AppTheme {
    pub const fn dark() -> Self {
        Self {
            accent: Color::Rgb(52, 211, 153),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(248, 113, 113),
            temperature: Color::Rgb(251, 146, 60),
            humidity: Color::Rgb(96, 165, 250),
            text_primary: Color::Rgb(248, 250, 252),
            text_secondary: Color::Rgb(148, 163, 184),
            text_muted: Color::Rgb(100, 116, 139),
            border: Color::Rgb(71, 85, 105),
            highlight_bg: Color::Rgb(51, 65, 85),
            header_bg: Color::Rgb(30, 41, 59),
        }
    }

    pub const fn light() -> Self {
        Self {
            accent: Color::Rgb(5, 150, 105),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(217, 119, 6),
            danger: Color::Rgb(220, 38, 38),
            temperature: Color::Rgb(234, 88, 12),
            humidity: Color::Rgb(37, 99, 235),
            text_primary: Color::Rgb(15, 23, 42),
            text_secondary: Color::Rgb(71, 85, 105),
            text_muted: Color::Rgb(148, 163, 184),
            border: Color::Rgb(203, 213, 225),
            highlight_bg: Color::Rgb(226, 232, 240),
            header_bg: Color::Rgb(241, 245, 249),
        }
    }

    /// Bold accent text for titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// The selected range button.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default().bg(self.header_bg)
    }

    /// Rounded, titled panel. Focused panels (the help overlay) take the
    /// accent border.
    pub fn panel(&self, title: impl Into<String>, focused: bool) -> Block<'static> {
        let border = if focused { self.accent } else { self.border };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(title.into(), self.title()))
    }
}
