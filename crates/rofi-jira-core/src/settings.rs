//! Runtime settings assembled once at startup.
//!
//! The binary fills these from command-line flags, environment variables and
//! defaults (in that order of precedence). Nothing else in the crate reads the
//! environment for them.

use crate::config::AppConfig;
use crate::error::{Result, RofiJiraError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Settings for one rofi-jira run.
#[derive(Clone)]
pub struct Settings {
    /// YAML file holding the named searches.
    pub config_path: PathBuf,
    /// Search name given on the command line; `None` means ask the picker.
    pub search: Option<String>,
    /// Base URL of the Jira server, e.g. `https://jira.example.com/jira`.
    pub server_url: String,
    pub username: String,
    pub password: String,
    /// Skip TLS certificate verification. Deployments commonly run Jira
    /// behind self-signed certificates, so this is on unless turned off.
    pub accept_invalid_certs: bool,
}

impl Settings {
    /// Settings with every default applied.
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(AppConfig::DEFAULT_CONFIG_FILE),
            search: None,
            server_url: AppConfig::DEFAULT_SERVER_URL.to_string(),
            username: current_username(),
            password: String::new(),
            accept_invalid_certs: true,
        }
    }

    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = expand_home(path.as_ref());
        self
    }

    /// An empty name is treated the same as no name.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.is_empty());
        self
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Reject settings the run cannot work with.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.server_url).map_err(|e| RofiJiraError::Settings {
            field: "server_url".to_string(),
            message: format!("{}: {}", self.server_url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RofiJiraError::Settings {
                field: "server_url".to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("config_path", &self.config_path)
            .field("search", &self.search)
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Name of the user running the tool.
pub fn current_username() -> String {
    AppConfig::LOGIN_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .or_else(passwd_username)
        .unwrap_or_else(|| AppConfig::FALLBACK_USERNAME.to_string())
}

#[cfg(unix)]
fn passwd_username() -> Option<String> {
    nix::unistd::User::from_uid(nix::unistd::getuid())
        .ok()
        .flatten()
        .map(|user| user.name)
}

#[cfg(not(unix))]
fn passwd_username() -> Option<String> {
    None
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
