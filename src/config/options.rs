// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub target: TargetOptions,
    pub browser: BrowserOptions,
    pub selectors: Selectors,
    pub labels: Labels,
    pub timings: Timings,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            target: TargetOptions::default(),
            browser: BrowserOptions::default(),
            selectors: Selectors::default(),
            labels: Labels::default(),
            timings: Timings::default(),
        }
    }
}

impl AppOptions {
    /// Read options from a TOML file. Every missing key keeps its default.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// `path` when given, else `./sirs_autobed.toml` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(CONFIG_FILE);
                if p.is_file() {
                    logf!("Config: Loading {}", p.display());
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetOptions {
    /// Page opened when we launch our own browser.
    pub start_url: String,
    /// Path fragment the bed page must contain before we activate.
    /// Empty disables the route check.
    pub route: String,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            start_url: s!(DEFAULT_START_URL),
            route: s!(DEFAULT_ROUTE),
        }
    }
}

impl TargetOptions {
    pub fn route_matches(&self, location: &str) -> bool {
        self.route.is_empty() || location.contains(&self.route)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserOptions {
    pub headless: bool,
    /// Chromium/Chrome binary; autodetected when None.
    pub executable: Option<PathBuf>,
    /// Persistent profile so the SIRS login survives restarts.
    pub profile_dir: PathBuf,
    /// Attach to a running browser (e.g. `http://127.0.0.1:9222`) instead of launching one.
    pub connect: Option<String>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: false,
            executable: None,
            profile_dir: PathBuf::from(STORE_DIR).join(PROFILE_SUBDIR),
            connect: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub table_root: String,
    pub header_cells: String,
    pub pagination_items: String,
    pub body_rows: String,
    pub edit_link: String,
    pub save_button: String,
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            table_root: s!(TABLE_ROOT),
            header_cells: s!(HEADER_CELLS),
            pagination_items: s!(PAGINATION_ITEMS),
            body_rows: s!(BODY_ROWS),
            edit_link: s!(EDIT_LINK),
            save_button: s!(SAVE_BUTTON),
            active_class: s!(ACTIVE_CLASS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub updated: String,
    pub room: String,
    pub class: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            updated: s!(LABEL_UPDATED),
            room: s!(LABEL_ROOM),
            class: s!(LABEL_CLASS),
        }
    }
}

/// All waits, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub activation_poll_ms: u64,
    /// None = keep polling until the table shows up.
    pub activation_attempts: Option<u32>,
    pub page_poll_ms: u64,
    pub page_poll_attempts: u32,
    pub page_settle_ms: u64,
    pub tab_load_ms: u64,
    pub after_save_ms: u64,
    pub between_rows_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            activation_poll_ms: ACTIVATION_POLL_MS,
            activation_attempts: None,
            page_poll_ms: PAGE_POLL_MS,
            page_poll_attempts: PAGE_POLL_ATTEMPTS,
            page_settle_ms: PAGE_SETTLE_MS,
            tab_load_ms: TAB_LOAD_MS,
            after_save_ms: AFTER_SAVE_MS,
            between_rows_ms: BETWEEN_ROWS_MS,
        }
    }
}

impl Timings {
    /// No waiting at all; retry budgets kept. Used by tests and benches.
    pub fn instant() -> Self {
        Self {
            activation_poll_ms: 0,
            page_poll_ms: 0,
            page_settle_ms: 0,
            tab_load_ms: 0,
            after_save_ms: 0,
            between_rows_ms: 0,
            ..Self::default()
        }
    }

    #[inline] pub fn page_settle(&self) -> Duration { Duration::from_millis(self.page_settle_ms) }
    #[inline] pub fn tab_load(&self) -> Duration { Duration::from_millis(self.tab_load_ms) }
    #[inline] pub fn after_save(&self) -> Duration { Duration::from_millis(self.after_save_ms) }
    #[inline] pub fn between_rows(&self) -> Duration { Duration::from_millis(self.between_rows_ms) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts = AppOptions::from_toml(
            r#"
            [target]
            route = "bed"

            [timings]
            page_poll_attempts = 5
            "#,
        ).unwrap();

        assert_eq!(opts.target.route, "bed");
        assert_eq!(opts.target.start_url, DEFAULT_START_URL);
        assert_eq!(opts.timings.page_poll_attempts, 5);
        assert_eq!(opts.timings.page_poll_ms, PAGE_POLL_MS);
        assert_eq!(opts.selectors, Selectors::default());
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = AppOptions::from_toml("[timings]\npage_poll_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn empty_route_matches_everything() {
        let mut t = TargetOptions::default();
        assert!(t.route_matches("/sirs/tempat_tidur/index"));
        assert!(!t.route_matches("/sirs/login"));
        t.route.clear();
        assert!(t.route_matches("/sirs/login"));
    }
}
