//! Indicator browse list rendering
//!
//! Renders the full indicator registry grouped by category, with the cursor
//! row highlighted. Category headers are display-only; the selection index
//! walks the flat indicator list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{all_indicators, Category};
use crate::ui::ACCENT;

/// Renders the indicator list page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let indicators = all_indicators();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Indicators ({}) ", indicators.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut last_category: Option<Category> = None;
    for (index, indicator) in indicators.iter().enumerate() {
        if last_category != Some(indicator.category) {
            last_category = Some(indicator.category);
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                indicator.category.label().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let selected = index == app.selected_index;
        if selected {
            cursor_line = lines.len();
        }
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let unit = if indicator.unit.is_empty() {
            String::new()
        } else {
            format!("  ({})", indicator.unit)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}", marker, indicator.name), style),
            Span::styled(unit, Style::default().fg(Color::DarkGray)),
        ]));
    }

    // Keep the cursor row visible when the list outgrows the area
    let visible = inner.height as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(2).max(1)) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
