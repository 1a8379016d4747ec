//! Chart rendering for per-year currency series

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::util::format::format_currency_short;

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Render a yearly series as a vertical bar chart.
///
/// Years are sampled to fit the available width. Negative values draw as
/// zero-height red bars; the signed amount still shows in the bar label.
pub fn render_annual_bars(frame: &mut Frame, area: Rect, title: &str, series: &[(u32, f64)]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if series.is_empty() {
        let paragraph = Paragraph::new("No data to display").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let max_bars = (inner_width / 5).max(1);
    let step = if series.len() > max_bars {
        series.len().div_ceil(max_bars)
    } else {
        1
    };

    let bars: Vec<Bar> = series
        .iter()
        .step_by(step)
        .take(max_bars)
        .map(|(year, value)| {
            // Scale to thousands for the bar height
            let scaled = (value / 1000.0).max(0.0) as u64;
            let style = if *value < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Cyan)
            };

            Bar::default()
                .value(scaled)
                .label(Line::from(format!("Y{year}")))
                .text_value(format_currency_short(*value))
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Render a running-total series as a filled block-character area.
pub fn render_cumulative_area(frame: &mut Frame, area: Rect, title: &str, series: &[(u32, f64)]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if series.is_empty() || inner.height < 4 || inner.width < 10 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    // Top line carries the peak label, bottom line the year range
    let chart_height = inner.height.saturating_sub(2) as usize;
    let chart_width = inner.width as usize;

    let mut peak = series.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
    if peak <= 0.0 {
        peak = 1.0;
    }

    // Resample to one column per character cell; negatives draw as empty
    let columns: Vec<f64> = (0..chart_width)
        .map(|x| {
            let idx = x * series.len() / chart_width;
            (series[idx].1).max(0.0)
        })
        .collect();

    let mut lines: Vec<Line> = Vec::with_capacity(chart_height + 2);
    lines.push(Line::from(Span::styled(
        format_currency_short(peak),
        Style::default().fg(Color::DarkGray),
    )));

    for row in 0..chart_height {
        let floor = (chart_height - row - 1) as f64;
        let mut text = String::with_capacity(chart_width * 3);
        for &value in &columns {
            let cells = value / peak * chart_height as f64;
            let frac = (cells - floor).clamp(0.0, 1.0);
            text.push_str(BIN_CHARS[(frac * 8.0).round() as usize]);
        }
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Green),
        )));
    }

    let first_year = series.first().map(|(y, _)| *y).unwrap_or(1);
    let last_year = series.last().map(|(y, _)| *y).unwrap_or(1);
    let left = format!("Y{first_year}");
    let right = format!("Y{last_year}");
    let pad = chart_width.saturating_sub(left.len() + right.len());
    lines.push(Line::from(Span::styled(
        format!("{left}{}{right}", " ".repeat(pad)),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
