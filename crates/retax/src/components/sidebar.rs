//! Global parameters sidebar
//!
//! Renders the full input list and owns field selection. Edits happen
//! through the input modal; toggle fields flip in place and trigger an
//! immediate recomputation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{Component, EventResult};
use crate::fields::InputField;
use crate::state::{AppState, Focus, InputModal, ModalState};

pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    fn activate_selected(state: &mut AppState) {
        let field = InputField::ALL[state.sidebar_state.selected_field];
        if field.is_toggle() {
            field.toggle(&mut state.inputs);
            state.recompute();
        } else {
            let current = field.edit_value(&state.inputs);
            state.modal = ModalState::Input(InputModal::new(field, &current));
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Sidebar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let num_fields = InputField::ALL.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.sidebar_state.selected_field =
                    (state.sidebar_state.selected_field + 1) % num_fields;
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.sidebar_state.selected_field = state
                    .sidebar_state
                    .selected_field
                    .checked_sub(1)
                    .unwrap_or(num_fields - 1);
                EventResult::Handled
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Self::activate_selected(state);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Sidebar;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" GLOBAL PARAMETERS ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = InputField::ALL
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let is_selected = focused && idx == state.sidebar_state.selected_field;
                // The reinvested value only matters while the exchange toggle
                // is on; dim it otherwise
                let is_inactive = *field == InputField::ReinvestedValue
                    && !state.inputs.simulate_exchange;

                let text = format!(
                    "{:<25}{:>11}",
                    field.label(),
                    field.display_value(&state.inputs)
                );

                let style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if is_inactive {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        frame.render_widget(List::new(items), inner_chunks[0]);

        let help = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
            Span::raw(" edit  "),
            Span::styled("[Space]", Style::default().fg(Color::Cyan)),
            Span::raw(" toggle"),
        ]);
        frame.render_widget(Paragraph::new(help), inner_chunks[1]);
    }
}
