// src/config/consts.rs

// Host page (SIRS bed table)
pub const TABLE_ROOT: &str = "#example2";
pub const HEADER_CELLS: &str = "#example2 thead th";
pub const PAGINATION_ITEMS: &str = "#example2_paginate ul li";
pub const BODY_ROWS: &str = "#example2 tbody tr";
pub const EDIT_LINK: &str = r#"a[href*="edit/"]"#;
pub const SAVE_BUTTON: &str = r#"button[type="submit"]"#;
pub const ACTIVE_CLASS: &str = "active";

// Header labels
pub const LABEL_UPDATED: &str = "Tgl Update";
pub const LABEL_ROOM: &str = "Ruang";
pub const LABEL_CLASS: &str = "Kelas";

// Target
pub const DEFAULT_START_URL: &str = "http://localhost/sirs/";
pub const DEFAULT_ROUTE: &str = "tempat_tidur";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const PROFILE_SUBDIR: &str = "profile";
pub const CONFIG_FILE: &str = "sirs_autobed.toml";
pub const CACHE_PREFIX: &str = "SIRS_BED_CACHE_";

// Scan pacing
pub const ACTIVATION_POLL_MS: u64 = 1_000;
pub const PAGE_POLL_MS: u64 = 200;
pub const PAGE_POLL_ATTEMPTS: u32 = 20;
pub const PAGE_SETTLE_MS: u64 = 300;

// Update pacing (per row)
pub const TAB_LOAD_MS: u64 = 3_000;
pub const AFTER_SAVE_MS: u64 = 2_000;
pub const BETWEEN_ROWS_MS: u64 = 1_000;

// Panel
pub const PANEL_TITLE: &str = "SIRS Auto Bed Update";
pub const PANEL_START_POS: (f32, f32) = (50.0, 120.0);
pub const BTN_SELECT_ALL: &str = "Select all";
pub const BTN_CLEAR_ALL: &str = "Clear all";
pub const BTN_RESCAN: &str = "Rescan";
pub const BTN_UPDATE: &str = "Update";
pub const ACK_TITLE: &str = "Update finished";
