//! UI rendering module for NaijaStats
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components. Every page
//! shares the same frame: a tab header, the page body, and a footer with
//! key hints and the refresh/status line.

pub mod chart;
pub mod comparison;
pub mod forecast;
pub mod help_overlay;
pub mod indicator_detail;
pub mod indicator_list;
pub mod overview;
pub mod sdg;

pub use help_overlay::render as render_help_overlay;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, AppState};

/// Accent color, after the green of the Nigerian flag.
pub(crate) const ACCENT: Color = Color::Green;
/// Color of projected points and forecast highlights.
pub(crate) const FORECAST_COLOR: Color = Color::Red;

/// Renders the whole frame for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match &app.state {
        AppState::Loading => render_loading(frame, chunks[1]),
        AppState::Overview => overview::render(frame, app, chunks[1]),
        AppState::IndicatorList => indicator_list::render(frame, app, chunks[1]),
        AppState::IndicatorDetail(key) => indicator_detail::render(frame, app, key, chunks[1]),
        AppState::Comparison => comparison::render(frame, app, chunks[1]),
        AppState::Sdg => sdg::render(frame, app, chunks[1]),
        AppState::Forecast => forecast::render(frame, app, chunks[1]),
    }

    render_footer(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders a loading message while data is being fetched
pub(crate) fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading indicator data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = [
        "1 Overview",
        "2 Indicators",
        "3 Comparison",
        "4 SDG",
        "5 Forecast",
    ]
    .iter()
    .map(|t| Line::from(*t))
    .collect();

    let selected = match &app.state {
        AppState::Loading | AppState::Overview => 0,
        AppState::IndicatorList | AppState::IndicatorDetail(_) => 1,
        AppState::Comparison => 2,
        AppState::Sdg => 3,
        AppState::Forecast => 4,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("NaijaStats - Nigeria Development Dashboard"),
        )
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match &app.state {
        AppState::Loading => "q: quit",
        AppState::Overview => "1-5/Tab: pages | r: refresh | ?: help | q: quit",
        AppState::IndicatorList => "j/k: move | Enter: detail | 1-5: pages | q: quit",
        AppState::IndicatorDetail(_) => "Esc: back | e: export CSV | f: forecast | q: quit",
        AppState::Comparison => "j/k: indicator | 1-5: pages | r: refresh | q: quit",
        AppState::Sdg => "1-5/Tab: pages | r: refresh | q: quit",
        AppState::Forecast => "j/k: indicator | +/-: horizon | e: export | q: quit",
    };

    let right = if let Some(status) = &app.status {
        status.clone()
    } else if let Some(refreshed) = &app.last_refresh {
        format!("Data as of {}", refreshed.format("%H:%M:%S"))
    } else {
        String::new()
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(area);

    let hints_widget = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints_widget, columns[0]);

    let status_widget = Paragraph::new(right)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_loading_state_shows_message() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Loading indicator data"));
        assert!(content.contains("NaijaStats"));
    }

    #[test]
    fn test_render_footer_shows_status_message() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        app.state = AppState::Sdg;
        app.status = Some("Exported gdp_NGA.csv".to_string());

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Exported gdp_NGA.csv"));
    }

    #[test]
    fn test_render_help_overlay_when_toggled() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        app.state = AppState::Overview;
        app.show_help = true;

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Keyboard Shortcuts"));
    }
}
