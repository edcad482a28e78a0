// src/core/mod.rs

pub mod date;
pub mod link;
pub mod poll;
pub mod sanitize;

pub use poll::{PollOutcome, RetryPolicy};
