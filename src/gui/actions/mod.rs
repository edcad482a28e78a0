// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{rescan, update, ...}.

mod rescan;   // src/gui/actions/rescan.rs
mod select;   // src/gui/actions/select.rs
mod update;   // src/gui/actions/update.rs

pub use rescan::rescan;
pub use select::{clear_all, select_all};
pub use update::{acknowledge, update};

/// What the panel asked for this frame; applied after drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Rescan,
    SelectAll,
    ClearAll,
    Update,
}

pub fn apply(app: &mut crate::gui::app::App, action: PanelAction) {
    match action {
        PanelAction::Rescan => rescan(app),
        PanelAction::SelectAll => select_all(app),
        PanelAction::ClearAll => clear_all(app),
        PanelAction::Update => update(app),
    }
}
