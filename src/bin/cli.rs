// src/bin/cli.rs
use sirs_autobed::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init()?;
    cli::run()
}
