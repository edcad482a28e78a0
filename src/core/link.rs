// src/core/link.rs
use std::sync::LazyLock;

use regex::Regex;

static EDIT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"edit/(\d+)").expect("static regex")
});

/// Numeric record id following `edit/` in an edit-link URL.
pub fn edit_id(url: &str) -> Option<u64> {
    EDIT_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
