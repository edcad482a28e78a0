// src/scan/scanner.rs
use crate::{
    browser::Document,
    config::options::AppOptions,
    core::date::now_local_time,
    error::Result,
    progress::Progress,
};
use super::{
    pager::{goto_page, PageTurn},
    table::{classify_rows, resolve_columns, total_pages},
    types::ScanReport,
};

/// Walk every page of the bed table and collect rows not updated on `today`.
///
/// Pages are visited once each, 1..=max, in ascending order; a page whose
/// pagination link has vanished is skipped rather than re-reading the one
/// still showing. A table without the date column yields an empty report
/// rather than an error; only driver failures propagate.
pub async fn scan_all_pages<D>(
    doc: &D,
    opts: &AppOptions,
    today: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScanReport>
where
    D: Document + ?Sized,
{
    let headers = doc.header_texts().await?;
    let Some(cols) = resolve_columns(&headers, &opts.labels) else {
        loge!("Scan: Column '{}' not found in headers {:?}", opts.labels.updated, headers);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Column '{}' not found", opts.labels.updated));
            p.finish();
        }
        return Ok(ScanReport::empty(today, &now_local_time()));
    };

    let labels = doc.pagination_labels().await?;
    let total = total_pages(&labels);
    logf!("Scan: Begin today={} pages={} cols={:?}", today, total, cols);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total as usize);
        p.log(&format!("Scanning {} page(s)…", total));
    }

    let mut report = ScanReport {
        date: s!(today),
        ..ScanReport::default()
    };

    for n in 1..=total {
        let turn = goto_page(doc, n, &opts.timings).await?;
        if turn == PageTurn::NoControl && n > 1 {
            // Reading now would count the previous page twice.
            logw!("Scan: Page {} has no pagination control, skipping it", n);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(n as usize);
            }
            continue;
        }

        let rows = doc.rows().await?;
        let tally = classify_rows(&rows, cols, today);
        logd!(
            "Scan: Page {} rows={} stale={} current={} skipped={}",
            n, rows.len(), tally.stale_total, tally.current, tally.skipped
        );

        report.pages += 1;
        report.stale_total += tally.stale_total;
        report.stale.extend(tally.stale);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(n as usize);
        }
    }

    report.scanned_at = now_local_time();
    logf!(
        "Scan: Done pages={} stale={} actionable={}",
        report.pages, report.stale_total, report.stale.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(report)
}
