//! Recent readings table.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Row, Table};
use sporehouse_core::display::{format_humidity, format_temperature};
use sporehouse_core::reading_timestamp;

use crate::tui::app::App;

/// Text shown before the first successful fetch.
const EMPTY_TABLE: &str = "No data available yet. Waiting for sensor readings...";

/// Rows for the most recent `n` readings, newest first.
fn recent_rows(app: &App) -> Vec<[String; 3]> {
    app.store
        .recent(app.table_rows)
        .map(|r| {
            [
                reading_timestamp(r),
                format_temperature(r.temperature),
                format_humidity(r.humidity),
            ]
        })
        .collect()
}

/// Draw the recent readings table.
pub(super) fn draw_recent_table(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let block = theme.panel(" Recent readings ", false);

    let rows = recent_rows(app);
    if rows.is_empty() {
        let empty = Paragraph::new(EMPTY_TABLE)
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Timestamp", "Temperature", "Humidity"]).style(
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    );
    let rows = rows
        .into_iter()
        .map(|cells| Row::new(cells).style(Style::default().fg(theme.text_primary)));

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
