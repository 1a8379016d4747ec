pub mod cash_flow;
pub mod exchange;
pub mod overview;
pub mod sale;
pub mod schedule;
pub mod segmentation;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::components::Component;
use crate::state::{AppState, MessageModal, ModalState};

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Placeholder body shown while the report is withheld by a validation error
pub(crate) fn render_unavailable(frame: &mut Frame, area: Rect, block: Block) {
    let content = vec![
        Line::from(""),
        Line::from("No results to display."),
        Line::from(""),
        Line::from(Span::styled(
            "Fix the input error shown in the status bar to recompute.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Export a computed table to the data directory and report the outcome
pub(crate) fn export_table<T: serde::Serialize>(state: &mut AppState, name: &str, value: &T) {
    match state.data_dir.clone() {
        Some(dir) => match crate::export::export_json(&dir, name, value) {
            Ok(path) => {
                state.modal = ModalState::Message(MessageModal::info(
                    "Exported",
                    &format!("Wrote {}", path.display()),
                ));
            }
            Err(e) => state.set_error(format!("Export failed: {e}")),
        },
        None => state.set_error("No data directory configured".to_string()),
    }
}
