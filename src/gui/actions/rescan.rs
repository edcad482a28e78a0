// src/gui/actions/rescan.rs
use crate::gui::{app::App, worker::Command};

/// Remove the panel and ask the worker for a forced scan.
/// The worker clears the cache before scanning.
pub fn rescan(app: &mut App) {
    if app.running {
        logd!("UI: Rescan ignored, run in progress");
        return;
    }
    logf!("UI: Rescan");
    app.panel = None;
    app.running = true;
    app.status("Rescanning…");
    app.worker.send(Command::Rescan);
}
