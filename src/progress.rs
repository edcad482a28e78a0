// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scan/update).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress: Send {
    /// Called at the start with the total number of items (pages or rows).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a page was read, a row was visited).
    fn item_done(&mut self, _n: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
