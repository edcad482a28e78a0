// src/gui/components/checklist.rs
//
// One row per actionable stale bed: checkbox, room, class, last update.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::panel::Panel;

pub fn draw(ui: &mut egui::Ui, panel: &mut Panel) {
    let Panel { report, checked, .. } = panel;

    TableBuilder::new(ui)
        .id_salt("stale_checklist")
        .striped(true)
        .max_scroll_height(260.0)
        .column(Column::exact(22.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto())
        .header(18.0, |mut header| {
            header.col(|_| {});
            header.col(|ui| { ui.strong("Room"); });
            header.col(|ui| { ui.strong("Class"); });
            header.col(|ui| { ui.strong("Last update"); });
        })
        .body(|body| {
            body.rows(20.0, report.stale.len(), |mut row| {
                let i = row.index();
                let bed = &report.stale[i];
                row.col(|ui| {
                    ui.checkbox(&mut checked[i], "")
                        .on_hover_text(format!("id {} → {}", bed.id, bed.edit_url));
                });
                row.col(|ui| { ui.label(&bed.room); });
                row.col(|ui| { ui.label(&bed.class); });
                row.col(|ui| { ui.label(&bed.updated); });
            });
        });
}
