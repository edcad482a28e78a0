// src/core/sanitize.rs

/// Collapse whitespace runs (NBSP included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Index of the first header whose normalized text contains `label`.
pub fn find_header(headers: &[String], label: &str) -> Option<usize> {
    if label.is_empty() { return None; }
    headers.iter().position(|h| normalize_ws(h).contains(label))
}
