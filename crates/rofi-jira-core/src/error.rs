//! Error types for rofi-jira.
//!
//! Errors are coarse: almost every failure ends the run. The two controlled
//! failures (an unknown `--search` name and a picker selection that matches
//! no configured search) are flagged so the binary can report them tersely.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the rofi-jira library.
#[derive(Debug, Error)]
pub enum RofiJiraError {
    // Configuration errors
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse configuration {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    #[error("Invalid setting {field}: {message}")]
    Settings { field: String, message: String },

    // Search resolution errors
    #[error("Unknown search name: {name}")]
    UnknownSearchName { name: String },

    #[error("Selection does not match any configured search: {selection:?}")]
    NoMatchingSearch { selection: String },

    // Issue tracker errors
    #[error("Authentication rejected by {server} (HTTP {status_code})")]
    Authentication { server: String, status_code: u16 },

    #[error("Issue query failed: {message}")]
    Query {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Connection to {server} failed: {message}")]
    Connection {
        server: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    // Picker errors
    #[error("Failed to launch picker {program}: {source}")]
    PickerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    // Dispatch errors
    #[error("Malformed selection: {line:?}")]
    MalformedSelection { line: String },

    #[error("Failed to open {url}: {message}")]
    BrowserLaunch { url: String, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for rofi-jira operations.
pub type Result<T> = std::result::Result<T, RofiJiraError>;

impl From<std::io::Error> for RofiJiraError {
    fn from(err: std::io::Error) -> Self {
        RofiJiraError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl RofiJiraError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RofiJiraError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this is one of the expected, user-facing failures rather than
    /// a fault in a collaborator.
    pub fn is_controlled(&self) -> bool {
        matches!(
            self,
            RofiJiraError::UnknownSearchName { .. } | RofiJiraError::NoMatchingSearch { .. }
        )
    }

    /// Process exit code for this error.
    ///
    /// Cancellation is not an error and exits `0`; every error exits `1`.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
