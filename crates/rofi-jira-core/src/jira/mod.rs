//! Issue tracker access.
//!
//! [`IssueSource`] is the seam the workflow depends on; [`JiraClient`] talks
//! to the Jira REST API behind it.

mod client;
mod types;

pub use client::JiraClient;
pub use types::Issue;

use crate::error::Result;
use async_trait::async_trait;

/// Runs a query and returns matching issues in the tracker's order.
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Issue>>;
}
