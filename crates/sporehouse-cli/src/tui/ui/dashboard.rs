//! Live value cards and the range buttons.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use sporehouse_core::display::{format_humidity, format_temperature};
use sporehouse_core::{NO_DATA, Window, reading_timestamp};

use super::theme::AppTheme;
use crate::tui::app::App;

/// Create a bordered reading card whose border takes the value color.
fn reading_card(title: &str, value: &str, color: Color, theme: &AppTheme) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        theme
            .panel(format!(" {} ", title), false)
            .border_style(Style::default().fg(color)),
    )
}

/// Draw the temperature, humidity and last-update cards.
pub(super) fn draw_live_cards(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let latest = app.store.latest();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (temperature, humidity, updated, temp_color, hum_color) = match latest {
        Some(reading) => (
            format_temperature(reading.temperature),
            format_humidity(reading.humidity),
            reading_timestamp(reading),
            theme.temperature,
            theme.humidity,
        ),
        None => (
            "--".to_string(),
            "--".to_string(),
            NO_DATA.to_string(),
            theme.text_muted,
            theme.text_muted,
        ),
    };

    frame.render_widget(
        reading_card("Temperature", &temperature, temp_color, &theme),
        cards[0],
    );
    frame.render_widget(
        reading_card("Humidity", &humidity, hum_color, &theme),
        cards[1],
    );
    frame.render_widget(
        reading_card("Last update", &updated, theme.text_secondary, &theme),
        cards[2],
    );
}

/// Spans for the range buttons, highlighting the selected window.
fn window_spans(selected: Window, theme: &AppTheme) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(" Range: ", Style::default().fg(theme.text_muted))];
    for (i, window) in Window::ALL.iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, window.label());
        let style = if *window == selected {
            theme.selected()
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Draw the range buttons.
pub(super) fn draw_window_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let mut spans = window_spans(app.store.window(), &theme);

    let shown = app.store.filtered().len();
    spans.push(Span::styled(
        format!(" {} of {} shown", shown, app.store.len()),
        Style::default().fg(theme.text_muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
