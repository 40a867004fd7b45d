//! rofi-jira core - search Jira issues through a menu picker.
//!
//! The crate wires three outside systems together: a YAML file of named
//! searches, the Jira REST API and an interactive picker such as rofi. Each
//! collaborator sits behind a trait so the flow can run against doubles.
//!
//! # Example
//!
//! ```rust,no_run
//! use rofi_jira_core::{JiraClient, RofiPicker, SearchCatalog, Settings, SystemOpener, Workflow};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> rofi_jira_core::Result<()> {
//!     let settings = Settings::new().with_server_url("https://jira.example.com/jira");
//!     let catalog = SearchCatalog::load(&settings.config_path)?;
//!     let client = JiraClient::from_settings(&settings)?;
//!
//!     let workflow = Workflow {
//!         catalog: &catalog,
//!         picker: &RofiPicker::new(),
//!         source: &client,
//!         opener: &SystemOpener::new(),
//!         server_url: &settings.server_url,
//!     };
//!     println!("{:?}", workflow.run(None).await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod jira;
pub mod picker;
pub mod resolver;
pub mod searches;
pub mod settings;
pub mod status;
pub mod workflow;

// Re-export commonly used types
pub use dispatch::{browse_url, extract_issue_key, SystemOpener, UrlOpener};
pub use error::{Result, RofiJiraError};
pub use format::format_issue;
pub use jira::{Issue, IssueSource, JiraClient};
pub use picker::{Picker, RofiPicker, Selection};
pub use resolver::{resolve, Resolution};
pub use searches::{SearchCatalog, SearchDefinition};
pub use settings::Settings;
pub use status::glyph;
pub use workflow::{Outcome, Workflow};
