//! Help overlay showing all keybindings
//!
//! A centered modal listing every key the dashboard understands, grouped
//! by what the key acts on. The overlay swallows input until dismissed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Binding groups shown in the overlay, in display order.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("1-5", "Overview / Indicators / Comparison / SDG / Forecast"),
            ("Tab", "Next page"),
        ],
    ),
    (
        "Navigation",
        &[
            ("↑/k, ↓/j", "Move selection / cycle indicator"),
            ("Enter", "Open indicator detail"),
            ("Esc", "Go back / Quit"),
            ("q", "Quit application"),
        ],
    ),
    (
        "Data",
        &[
            ("r", "Refresh current page"),
            ("e", "Export CSV (detail, forecast)"),
            ("f", "Forecast this indicator (detail)"),
            ("+/-", "Widen / narrow forecast horizon"),
        ],
    ),
];

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (key, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<11}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    // Size the box to its content, borders included
    let height = lines.len() as u16 + 2;
    let overlay_area = centered_rect(58, height, frame.area());

    frame.render_widget(Clear, overlay_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        overlay_area,
    );
}

/// Centers a width x height rect inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_help_overlay_lists_all_sections() {
        let content = rendered_text(90, 30);

        assert!(content.contains("Keyboard Shortcuts"));
        assert!(content.contains("Pages"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Data"));
        assert!(content.contains("Export CSV"));
    }

    #[test]
    fn test_help_overlay_fits_small_terminal() {
        // The box clamps to the frame instead of panicking on underflow
        let content = rendered_text(40, 10);
        assert!(content.contains("Keyboard Shortcuts"));
    }
}
