// src/update.rs
//
// Update run: visit each selected row's edit page in its own tab and press
// save. Timing-based and best-effort; a save is never confirmed.

use crate::{
    browser::{AuxTab, TabOpener},
    config::options::AppOptions,
    error::Result,
    progress::Progress,
    scan::StaleRow,
};

/// What the single "done" acknowledgment is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub processed: usize,
}

/// Visit `rows` strictly one after another, in the order given.
/// Per-row failures are logged and skipped; the run itself never fails.
pub async fn run_update<T>(
    tabs: &T,
    rows: &[StaleRow],
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> UpdateSummary
where
    T: TabOpener + ?Sized,
{
    let mut summary = UpdateSummary::default();
    if rows.is_empty() {
        logf!("Update: Nothing selected");
        return summary;
    }

    logf!("Update: Begin rows={}", rows.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    for (i, row) in rows.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Updating {} {} ({}/{})", row.room, row.class, i + 1, rows.len()));
        }

        match visit(tabs, row, opts).await {
            Ok(true) => logd!("Update: id={} save clicked", row.id),
            Ok(false) => logd!("Update: id={} no save control", row.id),
            Err(e) => logw!("Update: id={} skipped: {}", row.id, e),
        }
        summary.processed += 1;

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i + 1);
        }
        tokio::time::sleep(opts.timings.between_rows()).await;
    }

    logf!("Update: Done processed={}", summary.processed);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

/// Open, wait, click save if present, wait, close.
async fn visit<T>(tabs: &T, row: &StaleRow, opts: &AppOptions) -> Result<bool>
where
    T: TabOpener + ?Sized,
{
    let tab = tabs.open(&row.edit_url).await?;
    tokio::time::sleep(opts.timings.tab_load()).await;

    let clicked = match tab.click_if_present(&opts.selectors.save_button).await {
        Ok(c) => c,
        Err(e) => {
            logw!("Update: id={} save click failed: {}", row.id, e);
            false
        }
    };

    tokio::time::sleep(opts.timings.after_save()).await;
    tab.close().await?;
    Ok(clicked)
}
