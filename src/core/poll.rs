// src/core/poll.rs
use std::future::Future;
use std::time::Duration;

use crate::error::Result;

/// Fixed-interval retry budget. `max_attempts: None` polls until ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn new(interval_ms: u64, max_attempts: Option<u32>) -> Self {
        Self { interval: Duration::from_millis(interval_ms), max_attempts }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Condition held; `waits` is how many intervals we slept first.
    Ready { waits: u32 },
    TimedOut { waits: u32 },
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool { matches!(self, PollOutcome::Ready { .. }) }
}

/// Check, sleep, re-check until `check` yields true or the budget runs out.
/// The condition is checked once more after the final sleep.
pub async fn poll_until<F, Fut>(policy: RetryPolicy, mut check: F) -> Result<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let mut waits = 0u32;
    loop {
        if check().await? {
            return Ok(PollOutcome::Ready { waits });
        }
        if let Some(max) = policy.max_attempts {
            if waits >= max {
                return Ok(PollOutcome::TimedOut { waits });
            }
        }
        tokio::time::sleep(policy.interval).await;
        waits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn ready_after_some_waits() {
        let calls = Cell::new(0u32);
        let out = poll_until(RetryPolicy::new(0, Some(20)), || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Ok(n >= 3) }
        }).await.unwrap();
        assert_eq!(out, PollOutcome::Ready { waits: 2 });
    }

    #[tokio::test]
    async fn times_out_on_budget() {
        let calls = Cell::new(0u32);
        let out = poll_until(RetryPolicy::new(0, Some(4)), || {
            calls.set(calls.get() + 1);
            async { Ok(false) }
        }).await.unwrap();
        assert_eq!(out, PollOutcome::TimedOut { waits: 4 });
        assert_eq!(calls.get(), 5);
    }
}
