//! Comparison page rendering
//!
//! A bar chart of the latest observed value of one indicator across
//! Nigeria and its peer countries. Countries whose series came back empty
//! are dropped at load time, so every bar here has a value.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, COMPARISON_START_YEAR};
use crate::data::{IndicatorSeries, DATA_END_YEAR, HOME_COUNTRY};
use crate::format::format_with_unit;
use crate::ui::{render_loading, ACCENT};

/// Bar heights are scaled up so sub-1.0 percentage values still rank.
const BAR_SCALE: f64 = 1000.0;

/// Renders the comparison page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let indicator = app.comparison_indicator();
    let Some(all) = app.comparison_series.get(indicator.key) else {
        render_loading(frame, area);
        return;
    };

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" Peer comparison - {} ", indicator.name),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        format!(
            "Latest value per country, {}-{} window  (j/k changes indicator)",
            COMPARISON_START_YEAR, DATA_END_YEAR
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(subtitle, rows[0]);

    if all.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            "No data for this indicator across the comparison set",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(message, rows[1]);
        return;
    }

    let bars: Vec<Bar> = all
        .iter()
        .filter_map(|series| latest_bar(series, indicator.unit))
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2);
    frame.render_widget(chart, rows[1]);
}

/// Builds one bar from a country's latest observation.
///
/// Negative values (e.g. a GDP contraction year) keep their real value in
/// the bar text but draw as a zero-height bar.
fn latest_bar<'a>(series: &'a IndicatorSeries, unit: &str) -> Option<Bar<'a>> {
    let latest = series.latest()?;
    let color = if series.country == HOME_COUNTRY {
        ACCENT
    } else {
        Color::Blue
    };
    Some(
        Bar::default()
            .value((latest.value.max(0.0) * BAR_SCALE) as u64)
            .text_value(format_with_unit(latest.value, unit))
            .label(Line::from(series.country_name.as_str()))
            .style(Style::default().fg(color)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::data::{Observation, SeriesStatus};
    use crate::ui;
    use ratatui::{backend::TestBackend, Terminal};

    fn series(country: &str, name: &str, value: f64) -> IndicatorSeries {
        IndicatorSeries {
            country: country.to_string(),
            country_name: name.to_string(),
            indicator: "NY.GDP.MKTP.CD".to_string(),
            points: vec![Observation { year: 2022, value }],
            status: SeriesStatus::Ok,
        }
    }

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(120, 35);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_comparison_shows_bars_with_formatted_values() {
        let mut app = App::new();
        app.state = AppState::Comparison;
        app.comparison_series.insert(
            "gdp".to_string(),
            vec![
                series("NGA", "Nigeria", 477.4e9),
                series("ZAF", "South Africa", 405.0e9),
            ],
        );

        let content = rendered_text(&app);

        assert!(content.contains("Peer comparison - GDP (current US$)"));
        assert!(content.contains("Nigeria"));
        assert!(content.contains("South Africa"));
        assert!(content.contains("$477.40B"));
    }

    #[test]
    fn test_comparison_empty_set_shows_message() {
        let mut app = App::new();
        app.state = AppState::Comparison;
        app.comparison_series.insert("gdp".to_string(), Vec::new());

        let content = rendered_text(&app);

        assert!(content.contains("No data for this indicator"));
    }

    #[test]
    fn test_comparison_before_load_shows_loading() {
        let mut app = App::new();
        app.state = AppState::Comparison;

        let content = rendered_text(&app);

        assert!(content.contains("Loading indicator data"));
    }
}
