//! SDG progress page rendering
//!
//! A table of tracked Sustainable Development Goal indicators with the
//! latest observed value next to the goal's 2030 target text.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::{App, SdgStatus};
use crate::format::format_number;
use crate::ui::{render_loading, ACCENT};

/// Renders the SDG progress page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(rows) = &app.sdg_status else {
        render_loading(frame, area);
        return;
    };

    let header = Row::new(vec!["Goal", "Indicator", "Latest", "Target"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows.iter().map(status_row).collect();

    let table = Table::new(
        body,
        [
            Constraint::Length(26),
            Constraint::Percentage(34),
            Constraint::Length(16),
            Constraint::Percentage(32),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" SDG Progress - Nigeria "),
    );

    frame.render_widget(table, area);
}

/// Builds one table row for a tracked goal.
fn status_row(status: &SdgStatus) -> Row<'static> {
    let latest = match (status.value, status.year) {
        (Some(value), Some(year)) => format!("{} ({})", format_number(value, 1), year),
        _ => "N/A".to_string(),
    };
    let latest_style = if status.value.is_some() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Row::new(vec![
        Cell::from(status.row.goal),
        Cell::from(status.row.description),
        Cell::from(latest).style(latest_style),
        Cell::from(status.row.target).style(Style::default().fg(Color::DarkGray)),
    ])
}
