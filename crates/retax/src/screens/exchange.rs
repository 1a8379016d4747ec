use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Screen, render_unavailable};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

pub struct ExchangeScreen;

impl ExchangeScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExchangeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ExchangeScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 1031 EXCHANGE SIMULATION ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let lines = match &report.exchange {
            Some(outcome) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        "  Reinvested Property Value:  ",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format_currency(outcome.reinvested_value)),
                ]),
                Line::from(vec![
                    Span::styled(
                        "  Estimated Deferred Tax:     ",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format_currency(outcome.deferred_tax),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "  A 1031 exchange defers both capital gains and depreciation recapture",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "  taxes. The figure above estimates the tax an outright sale would owe",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "  today; detailed planning with a tax professional is recommended.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            None => vec![
                Line::from(""),
                Line::from("  1031 exchange simulation is off."),
                Line::from(""),
                Line::from(Span::styled(
                    "  Turn on 'Simulate 1031 Exchange' in the sidebar to estimate the tax",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "  deferred by reinvesting into a replacement property.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Screen for ExchangeScreen {
    fn title(&self) -> &str {
        "1031 Exchange"
    }
}
