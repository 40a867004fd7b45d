//! One complete rofi-jira run.
//!
//! Search resolution, query, issue picker and dispatch happen strictly one
//! after another. The picker is invoked at most twice and each invocation
//! finishes before the next step starts.

use crate::config::PickerConfig;
use crate::dispatch::{dispatch, UrlOpener};
use crate::error::Result;
use crate::format::format_issues;
use crate::jira::IssueSource;
use crate::picker::Picker;
use crate::resolver::{resolve, Resolution};
use crate::searches::SearchCatalog;
use tracing::info;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An issue was opened at this URL.
    Opened(String),
    /// The user backed out of one of the pickers.
    Cancelled,
}

/// Collaborators for a run.
pub struct Workflow<'a> {
    pub catalog: &'a SearchCatalog,
    pub picker: &'a dyn Picker,
    pub source: &'a dyn IssueSource,
    pub opener: &'a dyn UrlOpener,
    /// Base URL used for browse links.
    pub server_url: &'a str,
}

impl Workflow<'_> {
    /// Resolve the search, run it, let the user pick an issue and open it.
    pub async fn run(&self, search_name: Option<&str>) -> Result<Outcome> {
        let query = match resolve(search_name, self.catalog, self.picker).await? {
            Resolution::Query(query) => query,
            Resolution::Cancelled => {
                info!("Search selection cancelled");
                return Ok(Outcome::Cancelled);
            }
        };

        let issues = self.source.search(&query).await?;
        let lines = format_issues(&issues);

        let selection = self.picker.show(PickerConfig::ISSUE_PROMPT, &lines).await?;
        if selection.is_cancelled() {
            info!("Issue selection cancelled");
            return Ok(Outcome::Cancelled);
        }

        match dispatch(&selection.text, self.server_url, self.opener)? {
            Some(url) => Ok(Outcome::Opened(url)),
            None => Ok(Outcome::Cancelled),
        }
    }
}
