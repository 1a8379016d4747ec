//! Shared rendering helpers for modal widgets

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Layout handed back after drawing a modal frame
pub struct ModalFrame {
    pub chunks: Rc<[Rect]>,
}

/// Draw a centered, cleared, bordered modal and split its interior.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

/// Render editable text with a block cursor at `cursor_pos`.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize) -> Line<'static> {
    let chars: Vec<char> = display_value.chars().collect();
    let mut spans = Vec::with_capacity(chars.len() + 1);

    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(
                c.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }
    if cursor_pos >= chars.len() {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).fg(Color::Black),
        ));
    }

    Line::from(spans)
}

/// Window a long value so the cursor stays visible within `max_width`.
/// Returns the visible slice and the cursor's position within it.
pub fn scroll_to_cursor(value: &str, cursor_pos: usize, max_width: usize) -> (String, usize) {
    if value.len() <= max_width {
        return (value.to_string(), cursor_pos);
    }

    let start = cursor_pos.saturating_sub(max_width / 2);
    let end = (start + max_width).min(value.len());
    let start = end.saturating_sub(max_width);

    (value[start..end].to_string(), cursor_pos - start)
}

/// One-line key hint: "[Enter] Confirm  [Esc] Cancel"
pub fn key_hints(keys: &[(&str, Color, &str)]) -> Paragraph<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, color, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(*color)));
        spans.push(Span::raw(format!(" {desc}")));
    }
    Paragraph::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_short_value_is_untouched() {
        let (visible, cursor) = scroll_to_cursor("27.5", 2, 40);
        assert_eq!(visible, "27.5");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_scroll_keeps_cursor_in_window() {
        let value = "123456789012345678901234567890";
        let (visible, cursor) = scroll_to_cursor(value, 25, 10);
        assert_eq!(visible.len(), 10);
        assert!(cursor < 10);
    }

    #[test]
    fn test_cursor_line_appends_block_at_end() {
        let line = render_cursor_line("42", 2);
        assert_eq!(line.spans.len(), 3);
    }
}
