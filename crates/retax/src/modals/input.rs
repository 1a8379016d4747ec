use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::ModalResult;
use super::helpers::{key_hints, render_cursor_line, render_modal_frame, scroll_to_cursor};
use crate::state::InputModal;

const MODAL_WIDTH: u16 = 52;
const MODAL_HEIGHT: u16 = 9;

/// Render the single-field edit modal
pub fn render_input_modal(frame: &mut Frame, modal: &InputModal) {
    let mf = render_modal_frame(
        frame,
        modal.field.label(),
        MODAL_WIDTH,
        MODAL_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Input field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        "Enter a new value",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, mf.chunks[1]);

    let input_width = (mf.chunks[3].width as usize).saturating_sub(2);
    let (visible, cursor) = scroll_to_cursor(&modal.value, modal.cursor_pos, input_width);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(mf.chunks[3]);
    frame.render_widget(input_block, mf.chunks[3]);
    frame.render_widget(
        Paragraph::new(render_cursor_line(&visible, cursor)),
        input_inner,
    );

    let help = key_hints(&[
        ("[Enter]", Color::Green, "Confirm"),
        ("[Esc]", Color::Yellow, "Cancel"),
    ]);
    frame.render_widget(help, mf.chunks[5]);
}

/// Handle key events for the edit modal
pub fn handle_input_key(key: KeyEvent, modal: &mut InputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.field, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}
