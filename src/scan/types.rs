// src/scan/types.rs
use serde::{Deserialize, Serialize};

/// A row whose "Tgl Update" is not today and that has a usable edit link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaleRow {
    pub id: u64,
    pub class: String,
    pub room: String,
    /// `YYYY-MM-DD`
    pub updated: String,
    pub edit_url: String,
}

/// Aggregate of one full scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Local date the rows were compared against.
    pub date: String,
    /// Local wall-clock time the scan finished.
    pub scanned_at: String,
    pub pages: u32,
    /// Every stale row, including ones without a usable edit link.
    pub stale_total: usize,
    /// Actionable stale rows in page order, then document order.
    pub stale: Vec<StaleRow>,
}

impl ScanReport {
    /// Result of a scan that could not find the date column.
    pub fn empty(date: &str, scanned_at: &str) -> Self {
        Self {
            date: s!(date),
            scanned_at: s!(scanned_at),
            ..Self::default()
        }
    }

    #[inline] pub fn is_clean(&self) -> bool { self.stale_total == 0 }

    /// Rows counted as stale but left out of `stale` (no edit link / no id).
    #[inline] pub fn unactionable(&self) -> usize { self.stale_total - self.stale.len() }
}

/// Column positions resolved from the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub updated: usize,
    pub room: Option<usize>,
    pub class: Option<usize>,
}

/// Per-page classification result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTally {
    pub stale_total: usize,
    pub current: usize,
    pub skipped: usize,
    pub stale: Vec<StaleRow>,
}
