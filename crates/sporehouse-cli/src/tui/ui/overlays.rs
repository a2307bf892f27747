//! Help overlay.

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use super::theme::AppTheme;

/// Draw the keyboard shortcut overlay centered on the screen.
pub(super) fn draw_help_overlay(frame: &mut Frame, theme: &AppTheme) {
    let area = frame.area();
    let width = 46u16.min(area.width.saturating_sub(2));
    let height = 17u16.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    let help_area = Rect::new(x, y, width, height);
    frame.render_widget(Clear, help_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        section("--- Range ---"),
        shortcut_line("1", "Last 60 minutes", theme),
        shortcut_line("2", "Last 24 hours", theme),
        shortcut_line("3", "Last 30 days", theme),
        shortcut_line("4", "Last year", theme),
        Line::from(""),
        section("--- Data ---"),
        shortcut_line("r", "Refresh now", theme),
        shortcut_line("e", "Export CSV", theme),
        Line::from(""),
        section("--- Other ---"),
        shortcut_line("t", "Toggle theme", theme),
        shortcut_line("q/Esc", "Quit", theme),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let help = Paragraph::new(lines).block(theme.panel(" Keyboard Shortcuts ", true));
    frame.render_widget(help, help_area);
}

/// Create a shortcut line with key and description.
fn shortcut_line<'a>(key: &str, desc: &str, theme: &AppTheme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>8} ", key), Style::default().fg(theme.warning)),
        Span::styled(desc.to_string(), Style::default().fg(theme.text_secondary)),
    ])
}
