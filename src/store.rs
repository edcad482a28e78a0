// src/store.rs
//
// Per-session scan cache. Lives as long as the process, like the browser's
// sessionStorage: values are JSON strings under `SIRS_BED_CACHE_<date>`, so
// yesterday's entry never answers for today.

use std::collections::HashMap;

use crate::config::consts::CACHE_PREFIX;
use crate::error::Result;
use crate::scan::ScanReport;

pub fn cache_key(date: &str) -> String {
    join!(CACHE_PREFIX, date)
}

#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<String, String>,
}

impl SessionCache {
    pub fn new() -> Self { Self::default() }

    /// Cached report for `date`. A corrupt entry is dropped and reported as a miss.
    pub fn load(&mut self, date: &str) -> Option<ScanReport> {
        let key = cache_key(date);
        let raw = self.entries.get(&key)?;
        match serde_json::from_str(raw) {
            Ok(report) => Some(report),
            Err(e) => {
                loge!("Cache: Corrupt entry {}: {}", key, e);
                self.entries.remove(&key);
                None
            }
        }
    }

    /// Store `report` under its own date.
    pub fn save(&mut self, report: &ScanReport) -> Result<()> {
        let raw = serde_json::to_string(report)?;
        self.entries.insert(cache_key(&report.date), raw);
        logd!("Cache: Saved {}", cache_key(&report.date));
        Ok(())
    }

    /// Returns whether an entry was removed.
    pub fn clear(&mut self, date: &str) -> bool {
        self.entries.remove(&cache_key(date)).is_some()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
