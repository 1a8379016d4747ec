use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Screen, render_unavailable};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_currency, format_percentage};

/// Cost-segregation view: the asset-class breakdown for the selected
/// property type, and a year-one comparison across all types.
pub struct SegmentationScreen;

impl SegmentationScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let property_type = state.inputs.property_type;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" ASSET BREAKDOWN ({}) ", property_type.name()));

        let entries = state.catalog.breakdown(property_type);
        if entries.is_empty() {
            let msg = Paragraph::new("No asset breakdown data available for this property type.")
                .block(block);
            frame.render_widget(msg, area);
            return;
        }

        let mut lines = vec![Line::from(Span::styled(
            format!(
                "{:<18} {:>12} {:>12}   {}",
                "Asset Class", "% of Bldg", "Life (yrs)", "Example Assets"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        for entry in entries {
            lines.push(Line::from(format!(
                "{:<18} {:>12} {:>12}   {}",
                entry.label,
                format_percentage(entry.percent_of_building),
                entry.recovery_years,
                entry.examples,
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" FIRST-YEAR DEPRECIATION BY PROPERTY TYPE ");

        let Some(report) = &state.report else {
            render_unavailable(frame, area, block);
            return;
        };

        let mut lines = vec![Line::from(Span::styled(
            format!(
                "{:<14} {:>8} {:>17} {:>17} {:>17}",
                "Property Type", "Bonus %", "Bonus Depr.", "Normal (Y1)", "Total (Y1)"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        for row in &report.comparison {
            let style = if row.property_type == state.inputs.property_type {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{:<14} {:>8} {:>17} {:>17} {:>17}",
                    row.property_type.name(),
                    format_percentage(row.bonus_percent),
                    format_currency(row.year_one.bonus),
                    format_currency(row.year_one.normal),
                    format_currency(row.year_one.total),
                ),
                style,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Each row applies that type's default bonus share to the current property values.",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for SegmentationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SegmentationScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(8)])
            .split(area);

        self.render_breakdown(frame, chunks[0], state);
        self.render_comparison(frame, chunks[1], state);
    }
}

impl Screen for SegmentationScreen {
    fn title(&self) -> &str {
        "Segmentation"
    }
}
