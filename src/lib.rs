// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod browser;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod progress;
pub mod scan;
pub mod session;
pub mod store;
pub mod update;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
