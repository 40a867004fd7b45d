//! Centralized configuration constants for rofi-jira.
//!
//! Runtime settings (server, credentials) live in [`crate::settings`]; this
//! module only holds the fixed values the tool is built around.

use std::path::PathBuf;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "rofi-jira";
    pub const DEFAULT_CONFIG_FILE: &'static str = "rofi-jira.yaml";
    pub const DEFAULT_SERVER_URL: &'static str = "https://127.0.0.1/jira";
    pub const FALLBACK_USERNAME: &'static str = "unknown";

    pub const ENV_CONFIG: &'static str = "ROFI_JIRA_CONFIG";
    pub const ENV_PASSWORD: &'static str = "ROFI_JIRA_PASSWORD";
    pub const ENV_SERVER_URL: &'static str = "ROFI_JIRA_SERVER_URL";
    pub const ENV_USERNAME: &'static str = "ROFI_JIRA_USERNAME";

    /// Variables consulted, in order, for the current login name.
    pub const LOGIN_ENV_VARS: [&'static str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];
}

/// Issue tracker (Jira REST) configuration.
pub struct TrackerConfig;

impl TrackerConfig {
    pub const SEARCH_PATH: &'static str = "rest/api/2/search";
    pub const BROWSE_PATH: &'static str = "browse";
    pub const MAX_RESULTS: u32 = 2048;
    pub const FIELDS: &'static str = "summary,status";
    pub const USER_AGENT: &'static str = concat!("rofi-jira/", env!("CARGO_PKG_VERSION"));
}

/// Picker (rofi) configuration.
pub struct PickerConfig;

impl PickerConfig {
    pub const PROGRAM: &'static str = "rofi";
    /// Menu mode, case-insensitive matching, no custom entries.
    pub const BASE_ARGS: [&'static str; 3] = ["-dmenu", "-i", "-no-custom"];
    pub const PROMPT_FLAG: &'static str = "-p";
    pub const TRANSIENT_FILE_NAME: &'static str = "rofi-jira.out";
    pub const SEARCH_PROMPT: &'static str = "Search ... : ";
    pub const ISSUE_PROMPT: &'static str = "Search tickets : ";

    /// Fixed location of the picker input file.
    pub fn transient_file() -> PathBuf {
        std::env::temp_dir().join(Self::TRANSIENT_FILE_NAME)
    }
}
