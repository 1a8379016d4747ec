use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use retax_core::FIRST_YEAR_DEDUCTION_GOAL;

use super::{Screen, render_unavailable};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

pub struct OverviewScreen;

impl OverviewScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" DEPRECIATION OVERVIEW (YEAR 1) ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let year_one = &report.year_one;
        let goal_met = year_one.total >= FIRST_YEAR_DEDUCTION_GOAL;
        let goal_line = if goal_met {
            Span::styled(
                format!(
                    "First-year depreciation meets the {} passive-income offset goal.",
                    format_currency(FIRST_YEAR_DEDUCTION_GOAL)
                ),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                format!(
                    "First-year depreciation is below the {} goal. Adjust the parameters to reach it.",
                    format_currency(FIRST_YEAR_DEDUCTION_GOAL)
                ),
                Style::default().fg(Color::Yellow),
            )
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Bonus Depreciation:              ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_currency(year_one.bonus)),
            ]),
            Line::from(vec![
                Span::styled(
                    "  Normal Depreciation (Year 1):    ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_currency(year_one.normal)),
            ]),
            Line::from(vec![
                Span::styled(
                    "  Total First-Year Deduction:      ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format_currency(year_one.total),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::raw("  "), goal_line]),
            Line::from(""),
            Line::from(Span::styled(
                "  Cumulative depreciation over the modeling period can offset passive",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  income over time; see the Schedule tab.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Screen for OverviewScreen {
    fn title(&self) -> &str {
        "Overview"
    }
}
