// src/gui/components/summary.rs
use eframe::egui::{self, Color32, RichText};
use crate::scan::ScanReport;

const STALE_RED: Color32 = Color32::from_rgb(0xff, 0xcc, 0xcc);
const CLEAN_GREEN: Color32 = Color32::from_rgb(0xcc, 0xff, 0xcc);

pub fn draw(ui: &mut egui::Ui, report: &ScanReport) {
    if report.is_clean() {
        ui.label(RichText::new("All beds updated today").color(CLEAN_GREEN));
    } else {
        ui.label(RichText::new(format!("{} bed(s) need an update", report.stale_total)).color(STALE_RED));
        if report.unactionable() > 0 {
            ui.small(format!("{} without an edit link", report.unactionable()));
        }
    }
    ui.label(RichText::new(format!("Last Scan: {}", report.scanned_at)).small().weak());
}
