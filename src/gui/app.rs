// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::PANEL_TITLE, state::AppState},
    update::UpdateSummary,
};

use super::{
    components,
    panel::Panel,
    worker::{self, Event, WorkerHandle},
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        PANEL_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // at most one floating panel
    pub panel: Option<Panel>,

    // pending "done" acknowledgment after an update run
    pub ack: Option<UpdateSummary>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    pub worker: WorkerHandle,
}

impl App {
    pub fn new(state: AppState, ctx: egui::Context) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let worker = worker::spawn(state.options.clone(), status.clone(), ctx);

        logf!("Init: start_url={} route={:?}", state.options.target.start_url, state.options.target.route);

        Self {
            state,
            panel: None,
            ack: None,
            status,
            running: true,
            worker,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Create the panel unless one is already showing.
    pub fn ensure_panel(&mut self, report: crate::scan::ScanReport) {
        let (x, y) = self.state.gui.panel_start;
        if !Panel::place(&mut self.panel, report, egui::pos2(x, y)) {
            logd!("UI: Panel already present, keeping it");
        }
    }

    fn drain_events(&mut self) {
        while let Some(ev) = self.worker.try_recv() {
            match ev {
                Event::Activated => {
                    self.running = true;
                }
                Event::Scanned(report) => {
                    self.running = false;
                    self.status(format!("Last scan {}", report.scanned_at));
                    self.ensure_panel(report);
                }
                Event::UpdateDone(summary) => {
                    self.running = false;
                    self.status("Update finished");
                    self.ack = Some(summary);
                }
                Event::PageLeft => {
                    self.panel = None;
                    self.running = true;
                }
                Event::Failed(msg) => {
                    loge!("UI: Worker error: {}", msg);
                    self.running = false;
                    self.status(format!("Error: {msg}"));
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        let retry = egui::CentralPanel::default()
            .show(ctx, |ui| components::status_bar::draw(ui, self))
            .inner;

        if let Some(action) = retry.or_else(|| components::panel::draw(ctx, self)) {
            super::actions::apply(self, action);
        }

        if components::ack::draw(ctx, self) {
            super::actions::acknowledge(self);
        }
    }
}
