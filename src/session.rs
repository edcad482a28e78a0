// src/session.rs
//
// The controller: owns the driver, the session cache and the run guard, and
// sequences activation -> scan -> (optional) update.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    browser::{Document, Driver},
    config::options::AppOptions,
    core::{
        date::today_local,
        poll::{poll_until, PollOutcome, RetryPolicy},
    },
    error::{Error, Result},
    progress::Progress,
    scan::{scan_all_pages, ScanReport, StaleRow},
    store::SessionCache,
    update::{run_update, UpdateSummary},
};

/// Single-instance guard: at most one scan or update at a time.
/// Cloneable so a frontend can ask whether work is in flight.
#[derive(Clone, Debug, Default)]
pub struct RunGuard {
    busy: Arc<AtomicBool>,
}

/// Held for the duration of one run; releases the guard on drop.
#[derive(Debug)]
pub struct RunTicket {
    busy: Arc<AtomicBool>,
}

impl RunGuard {
    pub fn try_acquire(&self) -> Option<RunTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunTicket { busy: self.busy.clone() })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for RunTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub struct Controller<B: Driver> {
    driver: B,
    opts: AppOptions,
    cache: SessionCache,
    guard: RunGuard,
    clock: fn() -> String,
}

impl<B: Driver> Controller<B> {
    pub fn new(driver: B, opts: AppOptions) -> Self {
        Self {
            driver,
            opts,
            cache: SessionCache::new(),
            guard: RunGuard::default(),
            clock: today_local,
        }
    }

    /// Replace the local-date source (fixed dates in tests).
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn options(&self) -> &AppOptions { &self.opts }
    pub fn driver(&self) -> &B { &self.driver }
    pub fn guard(&self) -> RunGuard { self.guard.clone() }
    pub fn cache(&self) -> &SessionCache { &self.cache }
    pub fn into_driver(self) -> B { self.driver }

    pub fn today(&self) -> String { (self.clock)() }

    /// Route matches and the table root is in the DOM.
    pub async fn is_active(&self) -> Result<bool> {
        let doc = self.driver.document();
        if !self.opts.target.route_matches(&doc.location().await?) {
            return Ok(false);
        }
        doc.has_element(&self.opts.selectors.table_root).await
    }

    /// Poll until the bed table page is showing. Failed reads (page mid
    /// navigation) count as "not yet"; a closed browser ends the wait.
    pub async fn await_activation(&self) -> Result<PollOutcome> {
        let t = &self.opts.timings;
        let policy = RetryPolicy::new(t.activation_poll_ms, t.activation_attempts);
        let outcome = poll_until(policy, move || async move {
            match self.is_active().await {
                Err(e) if e.is_transient() => {
                    logd!("Session: Activation check failed, retrying: {}", e);
                    Ok(false)
                }
                res => res,
            }
        }).await?;
        match outcome {
            PollOutcome::Ready { waits } => logf!("Session: Table present after {} poll(s)", waits),
            PollOutcome::TimedOut { waits } => logw!("Session: Table absent after {} poll(s)", waits),
        }
        Ok(outcome)
    }

    /// `None` when the table is not on the page. Otherwise today's cached
    /// report unless `force`, else a full scan.
    pub async fn init(
        &mut self,
        force: bool,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Option<ScanReport>> {
        let _ticket = self.guard.try_acquire().ok_or(Error::Busy)?;
        let today = self.today();

        let doc = self.driver.document();
        if !doc.has_element(&self.opts.selectors.table_root).await? {
            logd!("Session: Table root {} absent", self.opts.selectors.table_root);
            return Ok(None);
        }

        if !force {
            if let Some(cached) = self.cache.load(&today) {
                logf!("Session: Using cached scan from {}", cached.scanned_at);
                return Ok(Some(cached));
            }
        }

        let report = scan_all_pages(doc, &self.opts, &today, progress).await?;
        self.cache.save(&report)?;
        Ok(Some(report))
    }

    /// Drop today's cached result and scan again.
    pub async fn rescan(
        &mut self,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Option<ScanReport>> {
        let today = self.today();
        if self.cache.clear(&today) {
            logd!("Session: Cleared cache for {}", today);
        }
        self.init(true, progress).await
    }

    /// Run the updater over `rows`, then invalidate today's cache.
    pub async fn update(
        &mut self,
        rows: &[StaleRow],
        progress: Option<&mut dyn Progress>,
    ) -> Result<UpdateSummary> {
        let _ticket = self.guard.try_acquire().ok_or(Error::Busy)?;
        let summary = run_update(&self.driver, rows, &self.opts, progress).await;
        self.cache.clear(&self.today());
        Ok(summary)
    }
}
