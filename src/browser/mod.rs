// src/browser/mod.rs
//
// The seam between scan/update logic and a live page. Everything the logic
// needs from the DOM goes through these traits; `cdp` drives a real Chromium,
// tests drive an in-memory table.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

pub mod cdp;

pub use cdp::{CdpDocument, CdpSession, CdpTab};

/// One `<tr>` as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    /// Visible text of each `<td>`, untrimmed.
    pub cells: Vec<String>,
    /// Absolute href of the row's first edit link.
    pub edit_href: Option<String>,
}

/// The bed table page.
#[async_trait]
pub trait Document: Send + Sync {
    async fn has_element(&self, selector: &str) -> Result<bool>;

    /// `location.pathname` of the page.
    async fn location(&self) -> Result<String>;

    async fn header_texts(&self) -> Result<Vec<String>>;

    /// Trimmed text of every pagination link, in document order.
    async fn pagination_labels(&self) -> Result<Vec<String>>;

    /// Click the pagination link whose text is exactly `label`.
    /// `false` when no such link exists.
    async fn click_page(&self, label: &str) -> Result<bool>;

    /// Whether the pagination item labelled `label` carries the active class.
    async fn page_is_active(&self, label: &str) -> Result<bool>;

    /// Body rows of the page currently shown.
    async fn rows(&self) -> Result<Vec<RawRow>>;
}

/// Opens auxiliary tabs for the update run.
#[async_trait]
pub trait TabOpener: Send + Sync {
    type Tab: AuxTab;

    async fn open(&self, url: &str) -> Result<Self::Tab>;
}

#[async_trait]
pub trait AuxTab: Send + Sync {
    /// Click the first element matching `selector`; `false` if there is none.
    async fn click_if_present(&self, selector: &str) -> Result<bool>;

    async fn close(&self) -> Result<()>;
}

/// A live browser: the bed table plus the ability to open more tabs.
pub trait Driver: TabOpener {
    type Doc: Document;

    fn document(&self) -> &Self::Doc;
}
