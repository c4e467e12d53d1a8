//! Forecast page rendering
//!
//! Draws the historical series and the linear projection as one chart,
//! historical columns in the accent color and projected columns in the
//! forecast color, with a summary panel of the fit beside it. A series too
//! short to fit gets a "not enough data" panel instead of a degenerate line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, ForecastView};
use crate::data::IndicatorSeries;
use crate::format::{format_number, format_with_unit};
use crate::predict::{summarize, Forecast, PredictError, CONFIDENCE_FACTOR};
use crate::ui::{chart, render_loading, ACCENT, FORECAST_COLOR};

/// Renders the forecast page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(view) = &app.forecast else {
        render_loading(frame, area);
        return;
    };
    let indicator = app.forecast_indicator();

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(
            " Forecast - {} (+{} years) ",
            indicator.name, view.horizon
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &view.result {
        Ok(forecast) => render_fit(frame, inner, view, forecast, indicator.unit),
        Err(error) => render_error(frame, inner, view, error),
    }
}

/// Renders the combined chart and the summary panel.
fn render_fit(
    frame: &mut Frame,
    area: Rect,
    view: &ForecastView,
    forecast: &Forecast,
    unit: &str,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    render_chart(frame, columns[0], &view.series, forecast);
    render_summary(frame, columns[1], view, forecast, unit);
}

/// Renders the historical-plus-projected chart with its legend and axis.
fn render_chart(frame: &mut Frame, area: Rect, series: &IndicatorSeries, forecast: &Forecast) {
    let body_width = chart::body_width(area.width as usize);
    let height = area.height.saturating_sub(2).max(1) as usize;

    let mut points: Vec<chart::ChartColumn> = series
        .points
        .iter()
        .map(|o| chart::ChartColumn {
            value: o.value,
            color: ACCENT,
        })
        .collect();
    points.extend(forecast.points.iter().map(|p| chart::ChartColumn {
        value: p.predicted,
        color: FORECAST_COLOR,
    }));

    let mut lines = chart::chart_body(&stretch(&points, body_width), height);

    let first_year = series.earliest().map(|o| o.year);
    let last_year = forecast.points.last().map(|p| p.year);
    if let (Some(first), Some(last)) = (first_year, last_year) {
        lines.push(chart::axis_line(first, last, body_width));
    }
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(chart::GUTTER_WIDTH)),
        Span::styled("█ historical  ", Style::default().fg(ACCENT)),
        Span::styled("█ projected", Style::default().fg(FORECAST_COLOR)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the numbers behind the fit.
fn render_summary(
    frame: &mut Frame,
    area: Rect,
    view: &ForecastView,
    forecast: &Forecast,
    unit: &str,
) {
    let block = Block::default().borders(Borders::ALL).title(" Summary ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if let Some(summary) = summarize(&view.series, forecast) {
        lines.push(Line::from(vec![
            Span::styled("Latest:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_with_unit(summary.latest_value, unit),
                Style::default().fg(ACCENT),
            ),
            Span::styled(
                format!(" ({})", summary.latest_year),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Projected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_with_unit(summary.final_value, unit),
                Style::default().fg(FORECAST_COLOR),
            ),
            Span::styled(
                format!(" ({})", summary.final_year),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let change_line = match summary.percent_change {
            Some(change) => {
                let (arrow, color) = if summary.is_increasing() {
                    ("▲", ACCENT)
                } else {
                    ("▼", Color::Red)
                };
                Line::from(vec![
                    Span::styled("Change:    ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{} {:+.1}%", arrow, change),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from(vec![
                Span::styled("Change:    ", Style::default().fg(Color::DarkGray)),
                Span::styled("n/a", Style::default().fg(Color::DarkGray)),
            ]),
        };
        lines.push(change_line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Trend:     ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/year", format_number(forecast.fit.slope, 1)),
            Style::default(),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Band:      ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "±{}",
                format_number(CONFIDENCE_FACTOR * forecast.fit.residual_std_error, 1)
            ),
            Style::default(),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Linear trend, illustrative only",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "+/- adjusts horizon, e exports",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the "no fit" states.
fn render_error(frame: &mut Frame, area: Rect, view: &ForecastView, error: &PredictError) {
    let message = match error {
        PredictError::InsufficientData { found } => format!(
            "Not enough data to fit a trend: need at least 2 points, found {}",
            found
        ),
        PredictError::DegenerateYears => {
            "Cannot fit a trend: all observations share one year".to_string()
        }
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow),
        )),
    ];
    if view.series.is_empty() {
        lines.push(Line::from(Span::styled(
            chart::empty_message(view.series.status),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        "j/k picks another indicator",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Stretches columns across the chart width, sampling when there are more
/// points than columns.
fn stretch(points: &[chart::ChartColumn], width: usize) -> Vec<chart::ChartColumn> {
    if points.is_empty() || width == 0 {
        return Vec::new();
    }
    (0..width)
        .map(|i| points[i * points.len() / width])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::data::{Observation, SeriesStatus};
    use crate::predict::linear_forecast;
    use crate::ui;
    use ratatui::{backend::TestBackend, Terminal};

    fn gdp_series() -> IndicatorSeries {
        IndicatorSeries {
            country: "NGA".to_string(),
            country_name: "Nigeria".to_string(),
            indicator: "NY.GDP.MKTP.CD".to_string(),
            points: vec![
                Observation {
                    year: 2018,
                    value: 400e9,
                },
                Observation {
                    year: 2020,
                    value: 430e9,
                },
                Observation {
                    year: 2022,
                    value: 460e9,
                },
            ],
            status: SeriesStatus::Ok,
        }
    }

    fn app_with_forecast() -> App {
        let series = gdp_series();
        let result = linear_forecast(&series, 3);
        let mut app = App::new();
        app.state = AppState::Forecast;
        app.horizon = 3;
        app.forecast = Some(ForecastView {
            key: "gdp".to_string(),
            series,
            horizon: 3,
            result,
        });
        app
    }

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(130, 35);
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
    fn test_forecast_shows_summary_numbers() {
        let content = rendered_text(&app_with_forecast());

        assert!(content.contains("Forecast - GDP (current US$) (+3 years)"));
        assert!(content.contains("$460.00B"));
        // Slope 15B/year from 2022's 460B: 2025 projects to 505B
        assert!(content.contains("$505.00B"));
        assert!(content.contains("(2025)"));
        assert!(content.contains("+9.8%"));
    }

    #[test]
    fn test_forecast_shows_legend() {
        let content = rendered_text(&app_with_forecast());
        assert!(content.contains("historical"));
        assert!(content.contains("projected"));
    }

    #[test]
    fn test_forecast_insufficient_data_panel() {
        let mut app = App::new();
        app.state = AppState::Forecast;
        app.forecast = Some(ForecastView {
            key: "gdp".to_string(),
            series: IndicatorSeries::empty("NGA", "NY.GDP.MKTP.CD", SeriesStatus::NoData),
            horizon: 5,
            result: Err(PredictError::InsufficientData { found: 0 }),
        });

        let content = rendered_text(&app);

        assert!(content.contains("Not enough data to fit a trend"));
        assert!(content.contains("found 0"));
    }

    #[test]
    fn test_forecast_before_load_shows_loading() {
        let mut app = App::new();
        app.state = AppState::Forecast;

        let content = rendered_text(&app);

        assert!(content.contains("Loading indicator data"));
    }
}
