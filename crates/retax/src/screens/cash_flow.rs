use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{Screen, export_table, render_unavailable};
use crate::charts::{render_annual_bars, render_cumulative_area};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

pub struct CashFlowScreen;

impl CashFlowScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" OPERATING CASH FLOW ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let start_idx = state.cash_flow_state.offset;
        let visible_count = (area.height as usize).saturating_sub(3);

        let mut items = vec![ListItem::new(Line::from(vec![Span::styled(
            format!(
                "{:>4} {:>13} {:>15} {:>15} {:>13} {:>14} {:>15}",
                "Year", "NOI", "Depreciation", "Taxable", "Tax", "Cash Flow", "Cumulative"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )]))];

        for record in report.cash_flow.iter().skip(start_idx).take(visible_count) {
            let style = if record.operating_cash_flow < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!(
                    "{:>4} {:>13} {:>15} {:>15} {:>13} {:>14} {:>15}",
                    record.year,
                    format_currency(record.noi),
                    format_currency(record.depreciation),
                    format_currency(record.taxable_income),
                    format_currency(record.tax_liability),
                    format_currency(record.operating_cash_flow),
                    format_currency(record.cumulative_cash_flow),
                ),
                style,
            ))));
        }

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_charts(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(report) = &state.report else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let annual: Vec<(u32, f64)> = report
            .cash_flow
            .iter()
            .map(|r| (r.year, r.operating_cash_flow))
            .collect();
        let cumulative: Vec<(u32, f64)> = report
            .cash_flow
            .iter()
            .map(|r| (r.year, r.cumulative_cash_flow))
            .collect();

        render_annual_bars(frame, chunks[0], " ANNUAL CASH FLOW ", &annual);
        render_cumulative_area(frame, chunks[1], " CUMULATIVE CASH FLOW ", &cumulative);
    }
}

impl Default for CashFlowScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CashFlowScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(report) = &state.report
                    && state.cash_flow_state.offset + 1 < report.cash_flow.len()
                {
                    state.cash_flow_state.offset += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.cash_flow_state.offset = state.cash_flow_state.offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                if let Some(report) = &state.report {
                    let table = report.cash_flow.clone();
                    export_table(state, "operating_cash_flow.json", &table);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(14)])
            .split(area);

        self.render_table(frame, chunks[0], state);
        self.render_charts(frame, chunks[1], state);
    }
}

impl Screen for CashFlowScreen {
    fn title(&self) -> &str {
        "Cash Flow"
    }
}
