//! Overview page rendering
//!
//! Shows the headline KPI tiles (GDP, population, growth, life expectancy),
//! a second row of access tiles (electricity, internet, mobile), and two
//! trend charts for GDP and GDP growth side by side.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Kpi};
use crate::format::format_with_unit;
use crate::ui::{chart, render_loading, ACCENT};

/// Renders the overview page
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `app` - The application state
/// * `area` - The page body area
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(overview) = &app.overview else {
        render_loading(frame, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(8),
        ])
        .split(area);

    render_tile_row(frame, rows[0], &overview.kpis);
    render_tile_row(frame, rows[1], &overview.access);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_trend(frame, charts[0], "GDP (current US$)", &overview.gdp_trend);
    render_trend(frame, charts[1], "GDP growth (annual %)", &overview.growth_trend);
}

/// Renders one row of equally sized metric tiles.
fn render_tile_row(frame: &mut Frame, area: Rect, kpis: &[Kpi]) {
    if kpis.is_empty() {
        return;
    }
    let share = (100 / kpis.len()) as u16;
    let constraints: Vec<Constraint> = kpis.iter().map(|_| Constraint::Percentage(share)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kpi, column) in kpis.iter().zip(columns.iter()) {
        render_tile(frame, *column, kpi);
    }
}

/// Renders a single metric tile: value on top, observation year below.
fn render_tile(frame: &mut Frame, area: Rect, kpi: &Kpi) {
    let (value_line, year_line) = match (kpi.value, kpi.year) {
        (Some(value), Some(year)) => (
            Line::from(Span::styled(
                format_with_unit(value, kpi.unit),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("as of {}", year),
                Style::default().fg(Color::DarkGray),
            )),
        ),
        _ => (
            Line::from(Span::styled("N/A", Style::default().fg(Color::DarkGray))),
            Line::from(""),
        ),
    };

    let tile = Paragraph::new(vec![value_line, year_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(truncate_title(kpi.label, area.width)),
        );
    frame.render_widget(tile, area);
}

/// Renders one of the two overview trend charts.
fn render_trend(frame: &mut Frame, area: Rect, title: &str, series: &crate::data::IndicatorSeries) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height.saturating_sub(1).max(1) as usize;
    let lines = chart::series_chart_lines(series, inner.width as usize, height, ACCENT);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Clips a tile title so it fits inside the tile border.
fn truncate_title(label: &str, width: u16) -> String {
    let max_len = width.saturating_sub(2) as usize;
    if label.len() <= max_len {
        label.to_string()
    } else {
        label.chars().take(max_len.saturating_sub(1)).collect::<String>() + "…"
    }
}
