// src/scan/mod.rs
mod pager;
mod scanner;
pub mod table;
pub mod types;

pub use pager::{goto_page, PageTurn};
pub use scanner::scan_all_pages;
pub use types::{Columns, ScanReport, StaleRow};
