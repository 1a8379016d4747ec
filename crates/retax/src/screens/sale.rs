use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{Screen, export_table, render_unavailable};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

/// Sale taxation by holding period. Each row answers "what would selling
/// after N years cost", using that year's cumulative depreciation.
pub struct SaleScreen;

impl SaleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SaleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SaleScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(report) = &state.report
                    && state.sale_state.offset + 1 < report.sale_by_holding_period.len()
                {
                    state.sale_state.offset += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.sale_state.offset = state.sale_state.offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                if let Some(report) = &state.report {
                    let table = report.sale_by_holding_period.clone();
                    export_table(state, "sale_tax_by_holding_period.json", &table);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" SALE OUTCOME BY HOLDING PERIOD ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let start_idx = state.sale_state.offset;
        let visible_count = (area.height as usize).saturating_sub(4);

        let mut items = vec![ListItem::new(Line::from(vec![Span::styled(
            format!(
                "{:>4} {:>15} {:>15} {:>15} {:>14} {:>14} {:>14}",
                "Yrs", "Cum. Depr.", "Adj. Basis", "Total Gain", "Recapture", "Cap. Gains", "Total Tax"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )]))];

        for row in report
            .sale_by_holding_period
            .iter()
            .skip(start_idx)
            .take(visible_count)
        {
            let gain_style = if row.tax.total_gain < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!(
                    "{:>4} {:>15} {:>15} {:>15} {:>14} {:>14} {:>14}",
                    row.holding_years,
                    format_currency(row.cumulative_depreciation),
                    format_currency(row.tax.adjusted_basis),
                    format_currency(row.tax.total_gain),
                    format_currency(row.tax.recapture_tax),
                    format_currency(row.tax.capital_gains_tax),
                    format_currency(row.tax.total_tax),
                ),
                gain_style,
            ))));
        }

        items.push(ListItem::new(Line::from(Span::styled(
            "Recapture at 25% of depreciation taken; capital gains at 20% of the remaining gain.",
            Style::default().fg(Color::DarkGray),
        ))));

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Screen for SaleScreen {
    fn title(&self) -> &str {
        "Sale & Tax"
    }
}
