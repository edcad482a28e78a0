// src/gui/components/panel.rs
//
// The floating panel: blue card, draggable by its title row.

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Sense};

use crate::{
    config::consts::PANEL_TITLE,
    gui::{actions::PanelAction, app::App},
};

pub const PANEL_BLUE: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2);

pub fn draw(ctx: &egui::Context, app: &mut App) -> Option<PanelAction> {
    let running = app.running;
    let panel = app.panel.as_mut()?;
    let mut action = None;

    let frame = Frame::window(&ctx.style())
        .fill(PANEL_BLUE)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(16, 14));

    egui::Window::new(PANEL_TITLE)
        .id(egui::Id::new("sirs_auto_panel"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .frame(frame)
        .fixed_pos(panel.drag.pos())
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.visuals_mut().override_text_color = Some(Color32::WHITE);

            let header = ui.add(
                egui::Label::new(RichText::new(PANEL_TITLE).strong())
                    .sense(Sense::drag())
                    .selectable(false),
            );
            panel.drag.track(&header.on_hover_cursor(egui::CursorIcon::Move));

            super::summary::draw(ui, &panel.report);

            if !panel.report.stale.is_empty() {
                ui.add_space(6.0);
                super::checklist::draw(ui, panel);
            }

            ui.add_space(8.0);
            action = super::action_buttons::draw(ui, panel, running);
        });

    action
}
