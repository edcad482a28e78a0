// src/gui/actions/update.rs
use crate::gui::{app::App, worker::Command};
use crate::update::UpdateSummary;

/// Hand the checked rows to the worker. With nothing checked the run is
/// trivially complete and the acknowledgment shows at once.
pub fn update(app: &mut App) {
    if app.running {
        return;
    }
    let rows = app.panel.as_ref().map(|p| p.selected_rows()).unwrap_or_default();

    if rows.is_empty() {
        logf!("UI: Update with no rows selected");
        app.ack = Some(UpdateSummary::default());
        return;
    }

    logf!("UI: Update {} row(s): {:?}", rows.len(), rows.iter().map(|r| r.id).collect::<Vec<_>>());
    app.running = true;
    app.status(format!("Updating {} bed(s)…", rows.len()));
    app.worker.send(Command::Update(rows));
}

/// The user dismissed the "done" dialog. Rescan when something was visited.
pub fn acknowledge(app: &mut App) {
    let Some(summary) = app.ack.take() else { return };
    if summary.processed > 0 {
        super::rescan(app);
    }
}
