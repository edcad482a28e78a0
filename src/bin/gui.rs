// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use sirs_autobed::{
    config::{options::AppOptions, state::AppState},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let options = match AppOptions::load_or_default(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_always_on_top(),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
