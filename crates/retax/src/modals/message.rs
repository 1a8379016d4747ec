use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::helpers::{key_hints, render_modal_frame};
use crate::state::MessageModal;

const MODAL_WIDTH: u16 = 56;

/// Render an informational or error message with an OK dismissal
pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let border_color = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let message_lines: Vec<&str> = modal.message.lines().collect();
    let height = (message_lines.len() as u16 + 5).max(7);

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        height,
        border_color,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let lines: Vec<Line> = message_lines.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default()),
        mf.chunks[1],
    );

    let help = key_hints(&[("[Enter]", Color::Green, "OK")]);
    frame.render_widget(help, mf.chunks[3]);
}
