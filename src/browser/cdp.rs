// src/browser/cdp.rs
//
// chromiumoxide-backed driver. DOM reads are small JS snippets run through
// `Page::evaluate`; their JSON results are deserialized with serde.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinHandle;

use super::{AuxTab, Document, Driver, RawRow, TabOpener};
use crate::config::options::{AppOptions, Selectors};
use crate::error::{Error, Result};

/// A JSON string literal, which is also a valid JS string literal.
fn js_str(s: &str) -> String {
    Value::from(s).to_string()
}

async fn eval<T: DeserializeOwned>(page: &Page, js: String) -> Result<T> {
    logd!("CDP: eval {}", js);
    let value = page.evaluate(js.as_str()).await?.into_value::<T>()?;
    Ok(value)
}

fn click_js(selector: &str) -> String {
    format!(
        "(() => {{ const el = document.querySelector({sel}); if (!el) return false; el.click(); return true; }})()",
        sel = js_str(selector),
    )
}

pub struct CdpSession {
    browser: Browser,
    document: CdpDocument,
    handler: JoinHandle<()>,
    /// Launched by us (close on shutdown) vs. attached to the user's browser.
    owned: bool,
}

impl CdpSession {
    /// Launch a browser (or attach to one) and locate the bed table page.
    pub async fn start(opts: &AppOptions) -> Result<Self> {
        let (mut browser, mut handler, owned) = match &opts.browser.connect {
            Some(url) => {
                logf!("Browser: Attaching to {}", url);
                let (b, h) = Browser::connect(url.clone())
                    .await
                    .map_err(|e| Error::Launch(e.to_string()))?;
                (b, h, false)
            }
            None => {
                std::fs::create_dir_all(&opts.browser.profile_dir)?;
                let mut builder = BrowserConfig::builder()
                    .user_data_dir(&opts.browser.profile_dir)
                    .viewport(None);
                if !opts.browser.headless {
                    builder = builder.with_head();
                }
                if let Some(exe) = &opts.browser.executable {
                    builder = builder.chrome_executable(exe);
                }
                let config = builder.build().map_err(Error::Launch)?;
                logf!("Browser: Launching (headless={})", opts.browser.headless);
                let (b, h) = Browser::launch(config)
                    .await
                    .map_err(|e| Error::Launch(e.to_string()))?;
                (b, h, true)
            }
        };

        // The handler must be polled for the connection to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        let page = if owned {
            browser.new_page(opts.target.start_url.as_str()).await?
        } else {
            find_page(&mut browser, &opts.target.route).await?
        };

        Ok(Self {
            browser,
            document: CdpDocument { page, selectors: opts.selectors.clone() },
            handler: handler_task,
            owned,
        })
    }

    pub async fn shutdown(mut self) {
        if self.owned {
            if let Err(e) = self.browser.close().await {
                logw!("Browser: Close failed: {}", e);
            }
        }
        self.handler.abort();
    }
}

/// First tab whose URL contains `route`, else the first tab at all.
async fn find_page(browser: &mut Browser, route: &str) -> Result<Page> {
    browser.fetch_targets().await?;
    // Attached targets show up once the handler has processed them.
    tokio::time::sleep(Duration::from_millis(500)).await;
    let pages = browser.pages().await?;

    let mut first = None;
    for page in pages {
        let url = page.url().await?.unwrap_or_default();
        logd!("Browser: Found tab {}", url);
        if !route.is_empty() && url.contains(route) {
            return Ok(page);
        }
        if first.is_none() {
            first = Some(page);
        }
    }
    first.ok_or(Error::NoPage)
}

impl Driver for CdpSession {
    type Doc = CdpDocument;

    fn document(&self) -> &CdpDocument {
        &self.document
    }
}

#[async_trait]
impl TabOpener for CdpSession {
    type Tab = CdpTab;

    async fn open(&self, url: &str) -> Result<CdpTab> {
        let page = self.browser.new_page(url).await?;
        Ok(CdpTab { page })
    }
}

/// The bed table tab.
pub struct CdpDocument {
    page: Page,
    selectors: Selectors,
}

#[async_trait]
impl Document for CdpDocument {
    async fn has_element(&self, selector: &str) -> Result<bool> {
        eval(&self.page, format!("document.querySelector({}) !== null", js_str(selector))).await
    }

    async fn location(&self) -> Result<String> {
        eval(&self.page, s!("window.location.pathname")).await
    }

    async fn header_texts(&self) -> Result<Vec<String>> {
        let js = format!(
            "Array.from(document.querySelectorAll({sel})).map(th => (th.textContent || '').trim())",
            sel = js_str(&self.selectors.header_cells),
        );
        eval(&self.page, js).await
    }

    async fn pagination_labels(&self) -> Result<Vec<String>> {
        let js = format!(
            "Array.from(document.querySelectorAll({sel}))\
                .map(li => li.querySelector('a'))\
                .filter(a => a !== null)\
                .map(a => (a.textContent || '').trim())",
            sel = js_str(&self.selectors.pagination_items),
        );
        eval(&self.page, js).await
    }

    async fn click_page(&self, label: &str) -> Result<bool> {
        let js = format!(
            "(() => {{\
                for (const li of document.querySelectorAll({sel})) {{\
                    const a = li.querySelector('a');\
                    if (a && (a.textContent || '').trim() === {label}) {{ a.click(); return true; }}\
                }}\
                return false;\
            }})()",
            sel = js_str(&self.selectors.pagination_items),
            label = js_str(label),
        );
        eval(&self.page, js).await
    }

    async fn page_is_active(&self, label: &str) -> Result<bool> {
        let js = format!(
            "(() => {{\
                for (const li of document.querySelectorAll({sel})) {{\
                    const a = li.querySelector('a');\
                    if (a && (a.textContent || '').trim() === {label}) return li.classList.contains({active});\
                }}\
                return false;\
            }})()",
            sel = js_str(&self.selectors.pagination_items),
            label = js_str(label),
            active = js_str(&self.selectors.active_class),
        );
        eval(&self.page, js).await
    }

    async fn rows(&self) -> Result<Vec<RawRow>> {
        let js = format!(
            "Array.from(document.querySelectorAll({rows})).map(tr => {{\
                const a = tr.querySelector({edit});\
                return {{\
                    cells: Array.from(tr.querySelectorAll('td')).map(td => td.textContent || ''),\
                    edit_href: a ? a.href : null\
                }};\
            }})",
            rows = js_str(&self.selectors.body_rows),
            edit = js_str(&self.selectors.edit_link),
        );
        eval(&self.page, js).await
    }
}

/// An auxiliary tab opened for one edit page.
pub struct CdpTab {
    page: Page,
}

#[async_trait]
impl AuxTab for CdpTab {
    async fn click_if_present(&self, selector: &str) -> Result<bool> {
        eval(&self.page, click_js(selector)).await
    }

    async fn close(&self) -> Result<()> {
        self.page.clone().close().await?;
        Ok(())
    }
}
