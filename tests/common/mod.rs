// tests/common/mod.rs
//
// In-memory stand-ins for the bed table page and its edit tabs.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sirs_autobed::browser::{AuxTab, Document, Driver, RawRow, TabOpener};
use sirs_autobed::config::options::{AppOptions, Timings};
use sirs_autobed::{Error, Result};

pub const TODAY: &str = "2024-06-01";

pub fn today() -> String {
    String::from(TODAY)
}

pub fn opts() -> AppOptions {
    let mut o = AppOptions::default();
    o.timings = Timings::instant();
    o.timings.activation_attempts = Some(3);
    o
}

pub fn headers(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

pub fn std_headers() -> Vec<String> {
    headers(&["No", "Ruang", "Kelas", "Tgl Update", "Aksi"])
}

/// A row laid out like `std_headers`.
pub fn bed(room: &str, date: &str, id: Option<u64>) -> RawRow {
    RawRow {
        cells: vec![
            String::from("1"),
            String::from(room),
            String::from("VIP"),
            String::from(date),
            String::from("Edit"),
        ],
        edit_href: id.map(|i| format!("https://sirs.local/tempat_tidur/edit/{i}")),
    }
}

#[derive(Debug, Default)]
struct TableState {
    pages: Vec<Vec<RawRow>>,
    current: u32,
    /// Polls left before `current` reports active.
    lag_left: u32,
    clicks: Vec<u32>,
    reads: Vec<u32>,
    root_present: bool,
    /// `has_element` checks that still miss the root before it shows up.
    root_delay: u32,
    /// `location` reads that fail like a page mid navigation.
    failing_reads: u32,
    closed: bool,
    /// Page numbers listed in the pagination but without a clickable link.
    dead_links: Vec<u32>,
    location: String,
}

pub struct FakeTable {
    headers: Vec<String>,
    /// Polls each page needs before it turns active.
    lag: u32,
    /// Active marker never moves.
    stuck: bool,
    state: Mutex<TableState>,
}

impl FakeTable {
    pub fn new(headers: Vec<String>, pages: Vec<Vec<RawRow>>) -> Self {
        Self {
            headers,
            lag: 0,
            stuck: false,
            state: Mutex::new(TableState {
                pages,
                current: 1,
                root_present: true,
                location: String::from("/sirs/tempat_tidur"),
                ..TableState::default()
            }),
        }
    }

    pub fn with_lag(mut self, lag: u32) -> Self { self.lag = lag; self }
    pub fn stuck(mut self) -> Self { self.stuck = true; self }

    pub fn clicks(&self) -> Vec<u32> { self.state.lock().unwrap().clicks.clone() }
    pub fn reads(&self) -> Vec<u32> { self.state.lock().unwrap().reads.clone() }

    pub fn set_pages(&self, pages: Vec<Vec<RawRow>>) {
        self.state.lock().unwrap().pages = pages;
    }
    pub fn set_root_present(&self, present: bool) {
        self.state.lock().unwrap().root_present = present;
    }
    pub fn set_location(&self, loc: &str) {
        self.state.lock().unwrap().location = String::from(loc);
    }
    /// The table root appears only after `checks` misses.
    pub fn appear_after(&self, checks: u32) {
        self.state.lock().unwrap().root_delay = checks;
    }
    pub fn fail_reads(&self, n: u32) {
        self.state.lock().unwrap().failing_reads = n;
    }
    pub fn close(&self) {
        self.state.lock().unwrap().closed = true;
    }
    pub fn kill_link(&self, page: u32) {
        self.state.lock().unwrap().dead_links.push(page);
    }
}

#[async_trait]
impl Document for FakeTable {
    async fn has_element(&self, selector: &str) -> Result<bool> {
        let mut st = self.state.lock().unwrap();
        if st.closed {
            return Err(Error::Closed(String::from("browser went away")));
        }
        if selector != "#example2" || !st.root_present {
            return Ok(false);
        }
        if st.root_delay > 0 {
            st.root_delay -= 1;
            return Ok(false);
        }
        Ok(true)
    }

    async fn location(&self) -> Result<String> {
        let mut st = self.state.lock().unwrap();
        if st.closed {
            return Err(Error::Closed(String::from("browser went away")));
        }
        if st.failing_reads > 0 {
            st.failing_reads -= 1;
            return Err(Error::Browser(String::from("Execution context was destroyed")));
        }
        Ok(st.location.clone())
    }

    async fn header_texts(&self) -> Result<Vec<String>> {
        Ok(self.headers.clone())
    }

    async fn pagination_labels(&self) -> Result<Vec<String>> {
        let n = self.state.lock().unwrap().pages.len();
        if n <= 1 {
            return Ok(Vec::new());
        }
        let mut labels = vec![String::from("Previous")];
        labels.extend((1..=n).map(|i| i.to_string()));
        labels.push(String::from("Next"));
        Ok(labels)
    }

    async fn click_page(&self, label: &str) -> Result<bool> {
        let mut st = self.state.lock().unwrap();
        let n = st.pages.len() as u32;
        match label.parse::<u32>() {
            Ok(p) if n > 1 && (1..=n).contains(&p) && !st.dead_links.contains(&p) => {
                st.clicks.push(p);
                st.current = p;
                st.lag_left = self.lag;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn page_is_active(&self, label: &str) -> Result<bool> {
        if self.stuck {
            return Ok(false);
        }
        let mut st = self.state.lock().unwrap();
        if label != st.current.to_string() {
            return Ok(false);
        }
        if st.lag_left > 0 {
            st.lag_left -= 1;
            return Ok(false);
        }
        Ok(true)
    }

    async fn rows(&self) -> Result<Vec<RawRow>> {
        let mut st = self.state.lock().unwrap();
        let cur = st.current;
        st.reads.push(cur);
        Ok(st.pages.get(cur as usize - 1).cloned().unwrap_or_default())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabEvent {
    Opened(String),
    Saved(String),
    Closed(String),
}

/// Edit URLs containing "nosave" have no save button; "broken" fails to open.
pub struct FakeBrowser {
    pub table: FakeTable,
    pub log: Arc<Mutex<Vec<TabEvent>>>,
}

impl FakeBrowser {
    pub fn new(table: FakeTable) -> Self {
        Self { table, log: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn events(&self) -> Vec<TabEvent> {
        self.log.lock().unwrap().clone()
    }
}

pub struct FakeTab {
    url: String,
    log: Arc<Mutex<Vec<TabEvent>>>,
}

#[async_trait]
impl TabOpener for FakeBrowser {
    type Tab = FakeTab;

    async fn open(&self, url: &str) -> Result<FakeTab> {
        if url.contains("broken") {
            return Err(Error::Browser(format!("cannot open {url}")));
        }
        self.log.lock().unwrap().push(TabEvent::Opened(url.to_string()));
        Ok(FakeTab { url: url.to_string(), log: self.log.clone() })
    }
}

impl Driver for FakeBrowser {
    type Doc = FakeTable;

    fn document(&self) -> &FakeTable {
        &self.table
    }
}

#[async_trait]
impl AuxTab for FakeTab {
    async fn click_if_present(&self, selector: &str) -> Result<bool> {
        assert_eq!(selector, r#"button[type="submit"]"#);
        if self.url.contains("nosave") {
            return Ok(false);
        }
        self.log.lock().unwrap().push(TabEvent::Saved(self.url.clone()));
        Ok(true)
    }

    async fn close(&self) -> Result<()> {
        self.log.lock().unwrap().push(TabEvent::Closed(self.url.clone()));
        Ok(())
    }
}
