// src/gui/components/action_buttons.rs
use eframe::egui::{self, Color32, RichText};

use crate::{
    config::consts::{BTN_CLEAR_ALL, BTN_RESCAN, BTN_SELECT_ALL, BTN_UPDATE},
    gui::{actions::PanelAction, panel::Panel},
};

const BTN_TEXT: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2);

fn white_button(ui: &mut egui::Ui, enabled: bool, text: &str) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(text).color(BTN_TEXT).size(12.0)).fill(Color32::WHITE),
    )
    .clicked()
}

fn update_label(selected: usize) -> String {
    format!("{BTN_UPDATE} ({selected})")
}

pub fn draw(ui: &mut egui::Ui, panel: &Panel, running: bool) -> Option<PanelAction> {
    let mut action = None;
    let has_rows = !panel.report.stale.is_empty();

    if has_rows {
        ui.horizontal(|ui| {
            if white_button(ui, !running, BTN_SELECT_ALL) {
                action = Some(PanelAction::SelectAll);
            }
            if white_button(ui, !running, BTN_CLEAR_ALL) {
                action = Some(PanelAction::ClearAll);
            }
        });
    }

    ui.horizontal(|ui| {
        if white_button(ui, !running, BTN_RESCAN) {
            action = Some(PanelAction::Rescan);
        }
        if has_rows {
            let label = update_label(panel.selected_count());
            if white_button(ui, !running, &label) {
                action = Some(PanelAction::Update);
            }
        }
    });

    action
}
