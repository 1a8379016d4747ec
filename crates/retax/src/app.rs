use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, sidebar::Sidebar, status_bar::StatusBar, tab_bar::TabBar,
};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{
    cash_flow::CashFlowScreen, exchange::ExchangeScreen, overview::OverviewScreen,
    sale::SaleScreen, schedule::ScheduleScreen, segmentation::SegmentationScreen,
};
use crate::state::{AppState, Focus, ModalState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    sidebar: Sidebar,
    overview_screen: OverviewScreen,
    schedule_screen: ScheduleScreen,
    sale_screen: SaleScreen,
    exchange_screen: ExchangeScreen,
    segmentation_screen: SegmentationScreen,
    cash_flow_screen: CashFlowScreen,
}

impl App {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            state: AppState::with_data_dir(data_dir),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            sidebar: Sidebar::new(),
            overview_screen: OverviewScreen::new(),
            schedule_screen: ScheduleScreen::new(),
            sale_screen: SaleScreen::new(),
            exchange_screen: ExchangeScreen::new(),
            segmentation_screen: SegmentationScreen::new(),
            cash_flow_screen: CashFlowScreen::new(),
        }
    }

    /// Runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);

        // Content: global parameters sidebar + active screen
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(0)])
            .split(chunks[1]);

        self.sidebar.render(frame, content[0], &self.state);
        self.render_active_screen(frame, content[1]);

        self.status_bar.render(frame, chunks[2], &self.state);

        // Modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Overview => self.overview_screen.render(frame, area, &self.state),
            TabId::Schedule => self.schedule_screen.render(frame, area, &self.state),
            TabId::Sale => self.sale_screen.render(frame, area, &self.state),
            TabId::Exchange => self.exchange_screen.render(frame, area, &self.state),
            TabId::Segmentation => self.segmentation_screen.render(frame, area, &self.state),
            TabId::CashFlow => self.cash_flow_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(field, value) => {
                    self.state.modal = ModalState::None;
                    match field.apply(&mut self.state.inputs, &value) {
                        Ok(()) => {
                            tracing::debug!(field = field.label(), %value, "input updated");
                            self.state.recompute();
                        }
                        Err(msg) => self.state.set_error(msg),
                    }
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Tab => {
                self.state.focus = self.state.focus.toggle();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Sidebar owns navigation keys while focused
        if self.state.focus == Focus::Sidebar {
            let result = self.sidebar.handle_key(key_event, &mut self.state);
            if result != EventResult::NotHandled {
                return;
            }
        }

        // Then the active screen
        let result = match self.state.active_tab {
            TabId::Overview => self.overview_screen.handle_key(key_event, &mut self.state),
            TabId::Schedule => self.schedule_screen.handle_key(key_event, &mut self.state),
            TabId::Sale => self.sale_screen.handle_key(key_event, &mut self.state),
            TabId::Exchange => self.exchange_screen.handle_key(key_event, &mut self.state),
            TabId::Segmentation => self
                .segmentation_screen
                .handle_key(key_event, &mut self.state),
            TabId::CashFlow => self.cash_flow_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }
}
