//! Turn the picked issue line into a browse URL and open it.

mod browser;

pub use browser::SystemOpener;

use crate::config::TrackerConfig;
use crate::error::{Result, RofiJiraError};
use tracing::info;

/// Opens URLs in whatever handles them on this machine.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Pull the issue key out of a `[<glyph>] <key> : <summary>` line.
pub fn extract_issue_key(line: &str) -> Result<String> {
    let malformed = || RofiJiraError::MalformedSelection {
        line: line.to_string(),
    };

    let (_, rest) = line.split_once(']').ok_or_else(malformed)?;
    let (key, _) = rest.split_once(':').ok_or_else(malformed)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(malformed());
    }

    Ok(key.to_string())
}

/// `<server>/browse/<key>`, with exactly one slash after the server URL.
pub fn browse_url(server_url: &str, key: &str) -> String {
    format!(
        "{}/{}/{}",
        server_url.trim_end_matches('/'),
        TrackerConfig::BROWSE_PATH,
        urlencoding::encode(key)
    )
}

/// Open the issue named by `selected_line`.
///
/// An empty selection means the user cancelled and nothing is opened.
/// Returns the URL that was opened, if any.
pub fn dispatch(
    selected_line: &str,
    server_url: &str,
    opener: &dyn UrlOpener,
) -> Result<Option<String>> {
    if selected_line.trim().is_empty() {
        return Ok(None);
    }

    let key = extract_issue_key(selected_line)?;
    let url = browse_url(server_url, &key);
    info!("Opening {}", url);
    opener.open(&url)?;
    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_extract_issue_key() {
        assert_eq!(extract_issue_key("[✔] X-1 : Fix bug").unwrap(), "X-1");
        assert_eq!(extract_issue_key("[] X-2 : Review").unwrap(), "X-2");
        assert_eq!(
            extract_issue_key("[?] PROJ-123 : Summary: with colons").unwrap(),
            "PROJ-123"
        );
    }

    #[test]
    fn test_extract_issue_key_malformed() {
        for line in ["X-1 : Fix bug", "[✔] X-1 Fix bug", "[✔]  : Fix bug"] {
            assert!(
                matches!(
                    extract_issue_key(line),
                    Err(RofiJiraError::MalformedSelection { .. })
                ),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_browse_url() {
        assert_eq!(browse_url("https://h/jira", "X-1"), "https://h/jira/browse/X-1");
        assert_eq!(browse_url("https://h/jira/", "X-1"), "https://h/jira/browse/X-1");
        assert_eq!(browse_url("https://h/jira", "A B"), "https://h/jira/browse/A%20B");
    }

    #[test]
    fn test_dispatch_opens_browse_url() {
        let opener = RecordingOpener::default();
        let url = dispatch("[✔] X-1 : Fix bug", "https://h/jira", &opener).unwrap();
        assert_eq!(url.as_deref(), Some("https://h/jira/browse/X-1"));
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["https://h/jira/browse/X-1".to_string()]
        );
    }

    #[test]
    fn test_dispatch_empty_selection_does_nothing() {
        let opener = RecordingOpener::default();
        assert_eq!(dispatch("", "https://h/jira", &opener).unwrap(), None);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_malformed_selection() {
        let opener = RecordingOpener::default();
        let result = dispatch("no delimiters here", "https://h/jira", &opener);
        assert!(matches!(
            result,
            Err(RofiJiraError::MalformedSelection { .. })
        ));
        assert!(opener.opened.lock().unwrap().is_empty());
    }
}
