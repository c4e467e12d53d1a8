//! Indicator detail screen rendering
//!
//! A full-width trend chart for one indicator, with a header summarizing
//! the latest observation and the change over the displayed window.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{indicator_by_key, IndicatorSeries};
use crate::format::format_with_unit;
use crate::ui::{chart, render_loading, ACCENT};

/// Renders the indicator detail page
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `app` - The application state
/// * `key` - Registry key of the indicator being viewed
/// * `area` - The page body area
pub fn render(frame: &mut Frame, app: &App, key: &str, area: Rect) {
    let Some(series) = app.detail_series.get(key) else {
        render_loading(frame, area);
        return;
    };
    let Some(indicator) = indicator_by_key(key) else {
        return;
    };

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" {} - {} ", series.country_name, indicator.name),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(inner);

    frame.render_widget(Paragraph::new(header_lines(series, indicator.unit)), rows[0]);

    let height = rows[1].height.saturating_sub(1).max(1) as usize;
    let lines = chart::series_chart_lines(series, rows[1].width as usize, height, ACCENT);
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

/// Builds the two header lines: latest observation and window change.
fn header_lines(series: &IndicatorSeries, unit: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match (series.latest(), series.earliest()) {
        (Some(latest), Some(earliest)) => {
            lines.push(Line::from(vec![
                Span::styled("Latest: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format_with_unit(latest.value, unit),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", latest.year),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            let mut spans = vec![Span::styled(
                format!(
                    "{} observations, {}-{}",
                    series.len(),
                    earliest.year,
                    latest.year
                ),
                Style::default().fg(Color::DarkGray),
            )];
            if earliest.value != 0.0 && latest.year != earliest.year {
                let change = (latest.value - earliest.value) / earliest.value.abs() * 100.0;
                let (arrow, color) = if change >= 0.0 {
                    ("▲", ACCENT)
                } else {
                    ("▼", Color::Red)
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("{} {:+.1}% over the window", arrow, change),
                    Style::default().fg(color),
                ));
            }
            lines.push(Line::from(spans));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                chart::empty_message(series.status),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}
