// src/gui/components/status_bar.rs
//
// Background of the companion window: what the worker is doing right now.
// Also the only way to retry when a scan failed and no panel is showing.

use eframe::egui::{self, widgets::Spinner};
use crate::{
    config::consts::BTN_RESCAN,
    gui::{actions::PanelAction, app::App},
};

/// A panel carries its own Rescan button; without one, offer it here
/// once the worker is idle.
pub fn offers_rescan(has_panel: bool, running: bool) -> bool {
    !has_panel && !running
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> Option<PanelAction> {
    let mut action = None;

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.horizontal(|ui| {
            if app.running {
                ui.add(Spinner::new().size(14.0));
            }
            ui.label(app.status_text());
        });
        if offers_rescan(app.panel.is_some(), app.running) && ui.button(BTN_RESCAN).clicked() {
            action = Some(PanelAction::Rescan);
        }
        ui.separator();
        ui.small(&app.state.options.target.start_url);
    });

    action
}
