// src/cli.rs
//
// Headless front end: scan and print, or update a chosen subset.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    browser::CdpSession,
    config::options::AppOptions,
    progress::Progress,
    scan::{ScanReport, StaleRow},
    session::Controller,
};

/// CLI waits this many activation polls for the table before giving up.
const CLI_ACTIVATION_ATTEMPTS: u32 = 60;

#[derive(Debug, Parser)]
#[command(name = "sirs_autobed-cli", version, about = "Find SIRS beds not updated today and resubmit them")]
pub struct Cli {
    /// TOML options file (defaults to ./sirs_autobed.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start URL when launching our own browser
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Attach to a running browser instead, e.g. http://127.0.0.1:9222
    #[arg(long, global = true, env = "SIRS_CDP_URL")]
    pub connect: Option<String>,

    #[arg(long, global = true)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan every page and list the beds not updated today
    Scan {
        /// Print the whole report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Visit edit pages and press save, one bed at a time
    Update {
        /// Bed ids, e.g. "12,40-45"
        #[arg(long, conflicts_with = "all")]
        ids: Option<String>,
        /// Every stale bed with an edit link
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::load_or_default(self.config.as_deref())?;
        if let Some(url) = &self.url {
            opts.target.start_url = url.clone();
        }
        if self.connect.is_some() {
            opts.browser.connect = self.connect.clone();
        }
        opts.browser.headless |= self.headless;
        opts.timings.activation_attempts.get_or_insert(CLI_ACTIVATION_ATTEMPTS);
        Ok(opts)
    }
}

/// Prints progress lines to stderr.
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, n: usize) { eprintln!("  {n}/{}", self.total); }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(run_async(cli))
}

async fn run_async(cli: Cli) -> Result<()> {
    let opts = cli.options()?;
    let session = CdpSession::start(&opts).await?;
    let mut ctl = Controller::new(session, opts);
    let res = drive(&mut ctl, &cli.command).await;
    ctl.into_driver().shutdown().await;
    res
}

async fn drive(ctl: &mut Controller<CdpSession>, command: &Command) -> Result<()> {
    if !ctl.await_activation().await?.is_ready() {
        bail!("bed table ({}) never appeared", ctl.options().selectors.table_root);
    }

    let mut prog = CliProgress { total: 0 };
    let report = ctl
        .init(true, Some(&mut prog))
        .await?
        .ok_or_else(|| eyre!("bed table disappeared before the scan"))?;

    match command {
        Command::Scan { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Update { ids, all } => {
            let rows = pick_rows(&report, ids.as_deref(), *all)?;
            let summary = ctl.update(&rows, Some(&mut prog)).await?;
            println!("Done ({} bed(s) visited)", summary.processed);
        }
    }
    Ok(())
}

fn print_report(report: &ScanReport) {
    println!("# {} stale of {} page(s), scanned {} {}", report.stale_total, report.pages, report.date, report.scanned_at);
    for r in &report.stale {
        println!("{}\t{}\t{}\t{}\t{}", r.id, r.room, r.class, r.updated, r.edit_url);
    }
    if report.unactionable() > 0 {
        println!("# {} stale row(s) without an edit link", report.unactionable());
    }
}

/// Rows to update, in report order.
fn pick_rows(report: &ScanReport, ids: Option<&str>, all: bool) -> Result<Vec<StaleRow>> {
    if all {
        return Ok(report.stale.clone());
    }
    let Some(spec) = ids else {
        bail!("pass --ids or --all");
    };
    let wanted = parse_ids_list(spec)?;
    let rows: Vec<StaleRow> = report
        .stale
        .iter()
        .filter(|r| wanted.binary_search(&r.id).is_ok())
        .cloned()
        .collect();
    for id in &wanted {
        if !rows.iter().any(|r| r.id == *id) {
            eprintln!("Warning: id {id} is not a stale bed, ignoring");
        }
    }
    Ok(rows)
}

/// "1,4-6, 9" → [1, 4, 5, 6, 9], sorted and deduplicated.
fn parse_ids_list(s: &str) -> Result<Vec<u64>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: u64 = part[..dash].trim().parse()?;
            let b: u64 = part[dash + 1..].trim().parse()?;
            if a > b { bail!("Invalid range: {}", part); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ids: &[u64]) -> ScanReport {
        ScanReport {
            date: s!("2024-06-01"),
            scanned_at: s!("08:00:00"),
            pages: 1,
            stale_total: ids.len(),
            stale: ids.iter().map(|&id| StaleRow {
                id,
                class: s!("I"),
                room: s!("Melati"),
                updated: s!("2024-05-01"),
                edit_url: format!("/edit/{id}"),
            }).collect(),
        }
    }

    #[test]
    fn ids_and_ranges() {
        assert_eq!(parse_ids_list("9, 1,4-6,,5").unwrap(), vec![1, 4, 5, 6, 9]);
        assert!(parse_ids_list("6-4").is_err());
        assert!(parse_ids_list("x").is_err());
    }

    #[test]
    fn picked_rows_follow_report_order() {
        let r = report(&[30, 10, 20]);
        let ids: Vec<u64> = pick_rows(&r, Some("10,30,99"), false).unwrap()
            .iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30, 10]);
        assert_eq!(pick_rows(&r, None, true).unwrap().len(), 3);
        assert!(pick_rows(&r, None, false).is_err());
    }

    #[test]
    fn cli_parses_update_ids() {
        let cli = Cli::try_parse_from(["sirs_autobed-cli", "--headless", "update", "--ids", "3-4"]).unwrap();
        assert!(cli.headless);
        assert!(matches!(cli.command, Command::Update { ids: Some(ref s), all: false } if s == "3-4"));
        assert!(Cli::try_parse_from(["sirs_autobed-cli", "update", "--ids", "1", "--all"]).is_err());
    }
}
