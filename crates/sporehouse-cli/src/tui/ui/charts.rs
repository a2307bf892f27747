//! Temperature, humidity and combined line charts over the selected window.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use sporehouse_core::{ChartSeries, Stats};

use super::theme::AppTheme;
use crate::tui::app::App;

/// Humidity is a percentage, so its axis is fixed.
const HUMIDITY_BOUNDS: [f64; 2] = [0.0, 100.0];

/// Y-axis bounds covering `stats`, padded so flat series stay visible.
fn value_bounds(stats: Option<Stats>) -> [f64; 2] {
    match stats {
        Some(s) if s.max > s.min => {
            let pad = (s.max - s.min) * 0.1;
            [s.min - pad, s.max + pad]
        }
        Some(s) => [s.min - 1.0, s.max + 1.0],
        None => [0.0, 1.0],
    }
}

/// X-axis bounds for `len` evenly spaced points.
fn x_bounds(len: usize) -> [f64; 2] {
    [0.0, len.saturating_sub(1).max(1) as f64]
}

/// Three y-axis labels: low, middle, high.
fn y_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::from(format!("{:.1}", bounds[0])),
        Span::from(format!("{:.1}", mid)),
        Span::from(format!("{:.1}", bounds[1])),
    ]
}

fn chart_block(title: String, theme: &AppTheme) -> Block<'static> {
    theme.panel(title, false)
}

fn line<'a>(name: &'static str, points: &'a [(f64, f64)], color: Color) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points)
}

fn stats_title(name: &str, unit: &str, stats: Option<Stats>) -> String {
    match stats {
        Some(s) => format!(
            " {} ({})  min {:.1}  max {:.1}  avg {:.1} ",
            name, unit, s.min, s.max, s.avg
        ),
        None => format!(" {} ({}) ", name, unit),
    }
}

/// Draw the three charts side by side.
pub(super) fn draw_charts(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let series: ChartSeries = app.store.chart_series();
    let summary = app.store.summary();
    let temp_stats = summary.map(|s| s.temperature);
    let hum_stats = summary.map(|s| s.humidity);

    let temperature = series.temperature_points();
    let humidity = series.humidity_points();
    let x = x_bounds(series.len());
    let muted = Style::default().fg(theme.text_muted);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let temp_bounds = value_bounds(temp_stats);
    let temp_chart = Chart::new(vec![line("°C", &temperature, theme.temperature)])
        .block(chart_block(stats_title("Temperature", "°C", temp_stats), &theme))
        .x_axis(Axis::default().bounds(x).style(muted))
        .y_axis(
            Axis::default()
                .bounds(temp_bounds)
                .labels(y_labels(temp_bounds))
                .style(muted),
        );
    frame.render_widget(temp_chart, columns[0]);

    let hum_chart = Chart::new(vec![line("%", &humidity, theme.humidity)])
        .block(chart_block(stats_title("Humidity", "%", hum_stats), &theme))
        .x_axis(Axis::default().bounds(x).style(muted))
        .y_axis(
            Axis::default()
                .bounds(HUMIDITY_BOUNDS)
                .labels(y_labels(HUMIDITY_BOUNDS))
                .style(muted),
        );
    frame.render_widget(hum_chart, columns[1]);

    let combined_bounds = combined_bounds(temp_bounds);
    let combined = Chart::new(vec![
        line("Temperature °C", &temperature, theme.temperature),
        line("Humidity %", &humidity, theme.humidity),
    ])
    .block(chart_block(" Temperature & Humidity ".to_string(), &theme))
    .x_axis(Axis::default().bounds(x).style(muted))
    .y_axis(
        Axis::default()
            .bounds(combined_bounds)
            .labels(y_labels(combined_bounds))
            .style(muted),
    );
    frame.render_widget(combined, columns[2]);
}

/// Shared axis for the combined chart: the humidity range widened to fit
/// the temperature series.
fn combined_bounds(temp_bounds: [f64; 2]) -> [f64; 2] {
    [
        temp_bounds[0].min(HUMIDITY_BOUNDS[0]),
        temp_bounds[1].max(HUMIDITY_BOUNDS[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds_padding() {
        let stats = Stats {
            min: 20.0,
            max: 30.0,
            avg: 25.0,
        };
        assert_eq!(value_bounds(Some(stats)), [19.0, 31.0]);
    }

    #[test]
    fn test_value_bounds_flat_and_empty() {
        let flat = Stats {
            min: 21.5,
            max: 21.5,
            avg: 21.5,
        };
        assert_eq!(value_bounds(Some(flat)), [20.5, 22.5]);
        assert_eq!(value_bounds(None), [0.0, 1.0]);
    }

    #[test]
    fn test_x_bounds() {
        assert_eq!(x_bounds(0), [0.0, 1.0]);
        assert_eq!(x_bounds(1), [0.0, 1.0]);
        assert_eq!(x_bounds(60), [0.0, 59.0]);
    }

    #[test]
    fn test_combined_bounds_cover_both_series() {
        assert_eq!(combined_bounds([18.0, 26.0]), [0.0, 100.0]);
        assert_eq!(combined_bounds([-5.0, 120.0]), [-5.0, 120.0]);
    }

    #[test]
    fn test_stats_title() {
        let stats = Stats {
            min: 20.0,
            max: 24.0,
            avg: 22.0,
        };
        assert_eq!(
            stats_title("Temperature", "°C", Some(stats)),
            " Temperature (°C)  min 20.0  max 24.0  avg 22.0 "
        );
        assert_eq!(stats_title("Humidity", "%", None), " Humidity (%) ");
    }
}
