// src/gui/worker.rs
//
// Background thread that owns the tokio runtime, the browser session and the
// controller. The UI thread talks to it with commands and reads events back;
// it never blocks on the browser.

use std::{
    sync::{mpsc, Arc, Mutex},
    thread,
    time::Duration,
};

use eframe::egui;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{
    browser::CdpSession,
    config::options::AppOptions,
    error::Error,
    gui::progress::GuiProgress,
    scan::{ScanReport, StaleRow},
    session::Controller,
    update::UpdateSummary,
};

#[derive(Debug)]
pub enum Command {
    /// Clear the cache and scan again.
    Rescan,
    /// Visit these rows, in this order.
    Update(Vec<StaleRow>),
}

#[derive(Debug)]
pub enum Event {
    /// Table page is up; a scan (or cache lookup) is starting.
    Activated,
    Scanned(ScanReport),
    UpdateDone(UpdateSummary),
    /// The user navigated away from the bed table.
    PageLeft,
    Failed(String),
}

pub struct WorkerHandle {
    cmd_tx: UnboundedSender<Command>,
    event_rx: mpsc::Receiver<Event>,
}

impl WorkerHandle {
    pub fn send(&self, cmd: Command) {
        if self.cmd_tx.send(cmd).is_err() {
            loge!("Worker: Command channel closed");
        }
    }

    pub fn try_recv(&self) -> Option<Event> {
        self.event_rx.try_recv().ok()
    }
}

struct Outbox {
    tx: mpsc::Sender<Event>,
    ctx: egui::Context,
}

impl Outbox {
    fn send(&self, ev: Event) {
        let _ = self.tx.send(ev);
        self.ctx.request_repaint();
    }
}

pub fn spawn(opts: AppOptions, status: Arc<Mutex<String>>, ctx: egui::Context) -> WorkerHandle {
    let (cmd_tx, cmd_rx) = unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel();
    let out = Outbox { tx: event_tx, ctx: ctx.clone() };

    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                out.send(Event::Failed(format!("Runtime: {e}")));
                return;
            }
        };
        rt.block_on(worker_loop(opts, cmd_rx, out, GuiProgress::new(status, ctx)));
    });

    WorkerHandle { cmd_tx, event_rx }
}

async fn worker_loop(
    opts: AppOptions,
    mut cmd_rx: UnboundedReceiver<Command>,
    out: Outbox,
    mut prog: GuiProgress,
) {
    prog.set_status("Starting browser…");
    let session = match CdpSession::start(&opts).await {
        Ok(s) => s,
        Err(e) => {
            loge!("Worker: {}", e);
            out.send(Event::Failed(e.to_string()));
            return;
        }
    };
    let leave_poll = Duration::from_millis(opts.timings.activation_poll_ms.max(250));
    let mut ctl = Controller::new(session, opts);

    'pages: loop {
        prog.set_status("Waiting for the bed table…");
        match ctl.await_activation().await {
            Ok(outcome) if outcome.is_ready() => {}
            Ok(_) => continue 'pages,
            Err(e) => {
                loge!("Worker: Activation failed: {}", e);
                out.send(Event::Failed(e.to_string()));
                break 'pages;
            }
        }

        out.send(Event::Activated);
        scan(&mut ctl, false, &out, &mut prog).await;

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    None => break 'pages,
                    Some(Command::Rescan) => scan(&mut ctl, true, &out, &mut prog).await,
                    Some(Command::Update(rows)) => {
                        match ctl.update(&rows, Some(&mut prog)).await {
                            Ok(summary) => out.send(Event::UpdateDone(summary)),
                            Err(e) => out.send(Event::Failed(e.to_string())),
                        }
                    }
                },
                _ = tokio::time::sleep(leave_poll) => {
                    if !ctl.is_active().await.unwrap_or(false) {
                        logf!("Worker: Bed table gone, waiting for it to come back");
                        out.send(Event::PageLeft);
                        continue 'pages;
                    }
                }
            }
        }
    }

    logf!("Worker: Shutting down");
    ctl.into_driver().shutdown().await;
}

async fn scan(
    ctl: &mut Controller<CdpSession>,
    force: bool,
    out: &Outbox,
    prog: &mut GuiProgress,
) {
    let res = if force {
        ctl.rescan(Some(&mut *prog)).await
    } else {
        ctl.init(false, Some(&mut *prog)).await
    };
    match res {
        Ok(Some(report)) => out.send(Event::Scanned(report)),
        Ok(None) => {
            prog.set_status("Bed table not found");
            out.send(Event::PageLeft);
        }
        Err(Error::Busy) => logw!("Worker: Scan refused, another run is active"),
        Err(e) => {
            loge!("Worker: Scan failed: {}", e);
            out.send(Event::Failed(e.to_string()));
        }
    }
}
