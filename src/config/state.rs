// src/config/state.rs
use super::options::AppOptions;
use crate::controller::Controls;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

/// Current values of the on-screen controls. Read fresh on every render.
#[derive(Clone, Debug, Default)]
pub struct GuiState {
    pub search: String,
    /// Empty string = "All Departments"
    pub department: String,
    /// Empty string = "All Terms"
    pub term: String,

    pub view: ViewMode,
}

impl GuiState {
    pub fn controls(&self) -> Controls<'_> {
        Controls { search: &self.search, department: &self.department, term: &self.term }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
