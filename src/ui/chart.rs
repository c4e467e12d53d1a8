//! Block-character trend charts shared by the series views
//!
//! Draws a series as one column of partial-block characters per
//! interpolated sample, with a value gutter on the left and a year axis
//! underneath. The overview, detail, and forecast pages all build their
//! charts from these pieces.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::data::{IndicatorSeries, SeriesStatus};
use crate::format::format_number;

/// Partial block characters, one eighth of a cell per step.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Width of the value-label gutter to the left of the chart body.
pub(crate) const GUTTER_WIDTH: usize = 9;

/// One chart column: a value and the color it is drawn in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartColumn {
    /// Sampled value the column height encodes
    pub value: f64,
    /// Column color; the forecast chart mixes two
    pub color: Color,
}

/// Builds the lines for a single-series chart: body plus year axis.
///
/// Returns only a placeholder message line when the series is empty.
pub(crate) fn series_chart_lines(
    series: &IndicatorSeries,
    width: usize,
    height: usize,
    color: Color,
) -> Vec<Line<'static>> {
    if series.is_empty() {
        return vec![Line::from(Span::styled(
            empty_message(series.status),
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let body_width = body_width(width);
    let values: Vec<f64> = series.points.iter().map(|o| o.value).collect();
    let columns: Vec<ChartColumn> = interpolate(&values, body_width)
        .into_iter()
        .map(|value| ChartColumn { value, color })
        .collect();

    let mut lines = chart_body(&columns, height);
    if let (Some(first), Some(last)) = (series.earliest(), series.latest()) {
        lines.push(axis_line(first.year, last.year, body_width));
    }
    lines
}

/// Builds the chart rows for pre-colored columns, top row first.
///
/// Column heights are scaled between the minimum and maximum value across
/// all columns; the gutter labels those two extremes. Every column shows at
/// least a sliver so a flat series still reads as a line.
pub(crate) fn chart_body(columns: &[ChartColumn], height: usize) -> Vec<Line<'static>> {
    if columns.is_empty() {
        return Vec::new();
    }
    let height = height.max(1);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for column in columns {
        min = min.min(column.value);
        max = max.max(column.value);
    }
    let range = max - min;

    let total_eighths = (height * 8) as f64;
    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let gutter = if row == 0 {
            format!("{:>7} ┤", format_number(max, 1))
        } else if row == height - 1 {
            format!("{:>7} ┼", format_number(min, 1))
        } else {
            format!("{:>7} │", "")
        };
        let mut spans = vec![Span::styled(gutter, Style::default().fg(Color::DarkGray))];

        // Rows fill bottom-up; this row covers eighths [row_base, row_base + 8)
        let row_base = ((height - 1 - row) * 8) as f64;
        for column in columns {
            let normalized = if range > 0.0 {
                (column.value - min) / range
            } else {
                0.5
            };
            let level = (normalized * total_eighths).round().max(1.0);
            let eighths_here = (level - row_base).clamp(0.0, 8.0) as usize;
            let glyph = if eighths_here == 0 {
                ' '
            } else {
                BLOCKS[eighths_here - 1]
            };
            spans.push(Span::styled(
                glyph.to_string(),
                Style::default().fg(column.color),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// The year axis row, indented past the gutter.
pub(crate) fn axis_line(first_year: i32, last_year: i32, body_width: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("{:width$}{}", "", year_labels(first_year, last_year, body_width), width = GUTTER_WIDTH),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Chart body width left of an area `width` once the gutter is taken out.
pub(crate) fn body_width(width: usize) -> usize {
    width.saturating_sub(GUTTER_WIDTH).max(8)
}

/// Lays year labels across `width` columns: first year left-aligned, last
/// year right-aligned, midpoint centered when there is room for it.
pub(crate) fn year_labels(first: i32, last: i32, width: usize) -> String {
    let first_label = first.to_string();
    let last_label = last.to_string();
    if width < first_label.len() + last_label.len() + 2 {
        return first_label;
    }

    let mut row = vec![' '; width];
    for (i, ch) in first_label.chars().enumerate() {
        row[i] = ch;
    }
    let last_start = width - last_label.len();
    for (i, ch) in last_label.chars().enumerate() {
        row[last_start + i] = ch;
    }

    let mid = (first + last) / 2;
    if mid != first && mid != last {
        let mid_label = mid.to_string();
        let mid_start = width / 2 - mid_label.len() / 2;
        // Only place the midpoint if it clears both end labels
        if mid_start > first_label.len() && mid_start + mid_label.len() + 1 < last_start {
            for (i, ch) in mid_label.chars().enumerate() {
                row[mid_start + i] = ch;
            }
        }
    }

    row.iter().collect()
}

/// Linearly interpolates values to fill the target width.
pub(crate) fn interpolate(values: &[f64], target_width: usize) -> Vec<f64> {
    if values.is_empty() || target_width == 0 {
        return Vec::new();
    }
    if values.len() == 1 {
        return vec![values[0]; target_width];
    }
    if target_width <= values.len() {
        return values.iter().take(target_width).copied().collect();
    }

    let source_len = values.len();
    let mut result = Vec::with_capacity(target_width);
    for i in 0..target_width {
        let source_pos = (i as f64 * (source_len - 1) as f64) / (target_width - 1) as f64;
        let lower = source_pos.floor() as usize;
        let upper = (lower + 1).min(source_len - 1);
        let fraction = source_pos - lower as f64;
        result.push(values[lower] * (1.0 - fraction) + values[upper] * fraction);
    }
    result
}

/// Placeholder text for a series with no observations.
pub(crate) fn empty_message(status: SeriesStatus) -> &'static str {
    match status {
        SeriesStatus::FetchFailed => "Data fetch failed - press r to retry",
        SeriesStatus::NoData | SeriesStatus::Ok => "No data available for this selection",
    }
}
