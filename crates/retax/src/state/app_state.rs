use std::path::PathBuf;

use retax_core::{AssetCatalog, ScenarioInputs, ScenarioReport, evaluate};

use super::{ModalState, TabId};

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Screen,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Screen,
            Focus::Screen => Focus::Sidebar,
        }
    }
}

#[derive(Debug, Default)]
pub struct SidebarState {
    pub selected_field: usize,
}

/// Vertical scroll position of a table screen
#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: usize,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub focus: Focus,
    /// Current scenario parameters; the single source of truth for all tabs
    pub inputs: ScenarioInputs,
    /// Read-only cost-segregation catalog, built once at startup
    pub catalog: AssetCatalog,
    /// None whenever the last recomputation failed; no tab renders stale data
    pub report: Option<ScenarioReport>,

    // Per-pane state
    pub sidebar_state: SidebarState,
    pub schedule_state: ScrollState,
    pub sale_state: ScrollState,
    pub cash_flow_state: ScrollState,

    pub modal: ModalState,
    pub error_message: Option<String>,
    /// Directory for logs and exports
    pub data_dir: Option<PathBuf>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            active_tab: TabId::Overview,
            focus: Focus::Sidebar,
            inputs: ScenarioInputs::default(),
            catalog: AssetCatalog::standard(),
            report: None,
            sidebar_state: SidebarState::default(),
            schedule_state: ScrollState::default(),
            sale_state: ScrollState::default(),
            cash_flow_state: ScrollState::default(),
            modal: ModalState::None,
            error_message: None,
            data_dir: None,
            exit: false,
        };
        state.recompute();
        state
    }
}

impl AppState {
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Some(data_dir),
            ..Self::default()
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Re-evaluate the whole scenario from the current inputs.
    ///
    /// On failure the previous report is discarded, not kept: a blocking
    /// validation error withholds the entire result set until the inputs are
    /// fixed.
    pub fn recompute(&mut self) {
        match evaluate(&self.inputs) {
            Ok(report) => {
                self.report = Some(report);
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("scenario evaluation failed: {e}");
                self.report = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::debug!("user-facing error: {msg}");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        // Only input-validation messages are dismissable; an error from a
        // failed evaluation stays until a valid recomputation replaces it
        if self.report.is_some() {
            self.error_message = None;
        }
    }
}
