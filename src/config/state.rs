// src/config/state.rs
use super::options::AppOptions;

/// How the provider list is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Cards, ViewMode::Table];

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Cards => "Cards",
            ViewMode::Table => "Table",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab
    pub view_mode: ViewMode,

    /// Text box buffer; the session only sees it through SearchChanged intents.
    pub search_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            search_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
