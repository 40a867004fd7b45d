//! Default-browser launching.

use super::UrlOpener;
use crate::error::{Result, RofiJiraError};
use std::process::{Command, Stdio};
use tracing::debug;

/// Hands URLs to the platform's default handler.
///
/// - Linux and BSD: `xdg-open`
/// - macOS: `open`
/// - Windows: `cmd /c start`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }

        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "start", "", url]);
            cmd
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemOpener {
    /// Only http and https URLs are opened.
    fn open(&self, url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RofiJiraError::BrowserLaunch {
                url: url.to_string(),
                message: "Only http/https URLs are allowed".to_string(),
            });
        }

        let result = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(mut child) => {
                // Reap the handler without making the caller wait for it.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                Ok(())
            }
            Err(e) => {
                debug!("URL handler failed for {}: {}", url, e);
                Err(RofiJiraError::BrowserLaunch {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}
