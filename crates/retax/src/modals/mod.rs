//! Modal overlays: single-field text entry and messages

mod helpers;
mod input;
mod message;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::fields::InputField;
use crate::state::{AppState, ModalState};

/// Result of handling a key while a modal is open
#[derive(Debug)]
pub enum ModalResult {
    /// Field edit confirmed with the entered text
    Confirmed(InputField, String),
    Cancelled,
    Continue,
}

pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> ModalResult {
    match &mut state.modal {
        ModalState::Input(modal) => input::handle_input_key(key, modal),
        ModalState::Message(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc => ModalResult::Cancelled,
            _ => ModalResult::Continue,
        },
        ModalState::None => ModalResult::Continue,
    }
}

pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::Input(modal) => input::render_input_modal(frame, modal),
        ModalState::Message(modal) => message::render_message_modal(frame, modal),
        ModalState::None => {}
    }
}

/// Center a fixed-size rect within `area`, clamped to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
