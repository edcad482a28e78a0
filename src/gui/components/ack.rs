// src/gui/components/ack.rs
//
// Single blocking "done" dialog after an update run. Carries no per-row detail.

use eframe::egui;
use crate::{config::consts::ACK_TITLE, gui::app::App};

/// Returns true on the frame the user dismisses the dialog.
pub fn draw(ctx: &egui::Context, app: &App) -> bool {
    let Some(summary) = app.ack else { return false };
    let mut dismissed = false;

    egui::Modal::new(egui::Id::new("update_done")).show(ctx, |ui| {
        ui.heading(ACK_TITLE);
        ui.label(format!("{} bed(s) visited.", summary.processed));
        ui.small("Saves are not confirmed; rescan to check.");
        ui.add_space(6.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    dismissed
}
