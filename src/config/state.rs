// src/config/state.rs
use super::consts::PANEL_START_POS;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Where a freshly created panel appears. Dragging never writes back here.
    pub panel_start: (f32, f32),
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 420.0,
            window_h: 560.0,
            panel_start: PANEL_START_POS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
