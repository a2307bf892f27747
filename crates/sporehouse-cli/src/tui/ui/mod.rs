//! Main layout and rendering for the dashboard.
//!
//! - **Header**: title, connection status, reading count and last sync
//! - **Live cards**: latest temperature and humidity
//! - **Window bar**: the four range buttons
//! - **Charts**: temperature, humidity and combined
//! - **Table**: most recent readings, newest first
//! - **Status bar**: key hints or status messages, and the clock

pub mod theme;

mod charts;
mod dashboard;
mod overlays;
mod table;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use sporehouse_core::FetchStatus;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use super::app::{App, Theme};
use crate::util::local_clock;
use theme::AppTheme;

/// Draw the complete dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    if matches!(app.theme, Theme::Light) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg())),
            frame.area(),
        );
    }

    let table_height = u16::try_from(app.table_rows).unwrap_or(u16::MAX).saturating_add(3);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Header bar
            Constraint::Length(3),            // Live cards
            Constraint::Length(1),            // Window bar
            Constraint::Min(8),               // Charts
            Constraint::Length(table_height), // Recent readings
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_layout[0], app);
    dashboard::draw_live_cards(frame, main_layout[1], app);
    dashboard::draw_window_bar(frame, main_layout[2], app);
    charts::draw_charts(frame, main_layout[3], app);
    table::draw_recent_table(frame, main_layout[4], app);
    draw_status_bar(frame, main_layout[5], app);

    if app.show_help {
        overlays::draw_help_overlay(frame, &app.app_theme());
    }
}

/// Color of the status indicator.
fn status_color(status: &FetchStatus, theme: &AppTheme) -> Color {
    match status {
        FetchStatus::Connecting => theme.warning,
        FetchStatus::Connected => theme.success,
        FetchStatus::Error(_) => theme.danger,
    }
}

/// Format a sync time as local `HH:MM:SS`.
fn local_time(at: OffsetDateTime) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    at.to_offset(offset)
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "--:--:--".to_string())
}

/// Draw the header bar with title, status and sync information.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let status = app.store.status();

    let mut spans = vec![
        Span::styled(" Sporehouse ", theme.title()),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            format!(" {} ", status.label()),
            Style::default()
                .fg(status_color(status, &theme))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} readings ", app.store.len()),
            Style::default().fg(theme.text_secondary),
        ),
    ];

    if let Some(at) = app.store.last_update() {
        spans.push(Span::styled(
            format!(" synced {} ", local_time(at)),
            Style::default().fg(theme.text_secondary),
        ));
    }

    spans.push(Span::styled(
        format!(" every {}s ", app.refresh_interval.as_secs()),
        Style::default().fg(theme.text_muted),
    ));
    spans.push(Span::styled(
        format!(" {} ", app.endpoint),
        Style::default().fg(theme.text_muted),
    ));

    let header = Paragraph::new(Line::from(spans)).style(theme.header());
    frame.render_widget(header, area);
}

/// Key hints shown when there is no status message.
fn hints() -> [(&'static str, &'static str); 6] {
    [
        ("1-4", "range"),
        ("r", "refresh"),
        ("e", "export"),
        ("t", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

/// Draw the status bar with hints or the current status message.
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let time_str = local_clock();

    let left_spans = if let Some(msg) = app.current_status_message() {
        vec![Span::styled(
            format!(" {}", msg),
            Style::default().fg(theme.text_secondary),
        )]
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(theme.text_muted),
            ));
        }
        spans
    };

    let status_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(10)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(left_spans)), status_layout[0]);

    let right = Paragraph::new(time_str)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Right);
    frame.render_widget(right, status_layout[1]);
}
