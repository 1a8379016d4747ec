use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{Screen, export_table, render_unavailable};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

pub struct ScheduleScreen;

impl ScheduleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScheduleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ScheduleScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(report) = &state.report
                    && state.schedule_state.offset + 1 < report.schedule.len()
                {
                    state.schedule_state.offset += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.schedule_state.offset = state.schedule_state.offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                if let Some(report) = &state.report {
                    let schedule = report.schedule.clone();
                    export_table(state, "depreciation_schedule.json", &schedule);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" MULTI-YEAR DEPRECIATION ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let start_idx = state.schedule_state.offset;
        let visible_count = (area.height as usize).saturating_sub(3);

        let mut items = vec![ListItem::new(Line::from(vec![Span::styled(
            format!(
                "{:>6} {:>16} {:>16} {:>16} {:>18}",
                "Year", "Bonus", "Normal", "Total", "Cumulative"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )]))];

        for entry in report.schedule.iter().skip(start_idx).take(visible_count) {
            items.push(ListItem::new(Line::from(format!(
                "{:>6} {:>16} {:>16} {:>16} {:>18}",
                entry.year,
                format_currency(entry.bonus),
                format_currency(entry.normal),
                format_currency(entry.total),
                format_currency(entry.cumulative),
            ))));
        }

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Screen for ScheduleScreen {
    fn title(&self) -> &str {
        "Schedule"
    }
}
