// src/core/date.rs
//
// Dates are compared as plain `YYYY-MM-DD` strings taken from the local
// clock. No timezone arithmetic anywhere.

use chrono::Local;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M:%S";

pub fn today_local() -> String {
    Local::now().format(DATE_FMT).to_string()
}

pub fn now_local_time() -> String {
    Local::now().format(TIME_FMT).to_string()
}

/// Date portion of a cell: everything before the first whitespace.
/// `None` for an empty cell.
pub fn parse_date(cell: &str) -> Option<&str> {
    cell.split_whitespace().next()
}
