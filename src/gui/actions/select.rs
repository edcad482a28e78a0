// src/gui/actions/select.rs
use crate::gui::app::App;

pub fn select_all(app: &mut App) {
    if let Some(panel) = app.panel.as_mut() {
        panel.select_all();
        logd!("UI: Selected all ({})", panel.selected_count());
    }
}

pub fn clear_all(app: &mut App) {
    if let Some(panel) = app.panel.as_mut() {
        panel.clear_all();
        logd!("UI: Cleared selection");
    }
}
