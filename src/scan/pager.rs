// src/scan/pager.rs
use crate::browser::Document;
use crate::config::options::Timings;
use crate::core::poll::{poll_until, PollOutcome, RetryPolicy};
use crate::error::Result;

/// What happened when we asked the table for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTurn {
    /// Clicked; `outcome` tells whether the active marker caught up.
    Clicked(PollOutcome),
    /// No pagination link carries this number.
    NoControl,
}

/// Click page `n`, wait for its pagination item to turn active, then settle.
/// A timeout is logged and otherwise ignored; we read whatever is shown.
pub async fn goto_page<D>(doc: &D, n: u32, timings: &Timings) -> Result<PageTurn>
where
    D: Document + ?Sized,
{
    let label = n.to_string();
    let label = label.as_str();
    if !doc.click_page(label).await? {
        logd!("Scan: No pagination control for page {}", n);
        return Ok(PageTurn::NoControl);
    }

    let policy = RetryPolicy::new(timings.page_poll_ms, Some(timings.page_poll_attempts));
    let outcome = poll_until(policy, move || doc.page_is_active(label)).await?;
    if !outcome.is_ready() {
        logw!("Scan: Page {} never turned active, reading it anyway", n);
    }

    tokio::time::sleep(timings.page_settle()).await;
    Ok(PageTurn::Clicked(outcome))
}
