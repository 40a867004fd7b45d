//! Jira REST client for issue searches.

use super::types::{ErrorResponse, Issue, SearchResponse};
use super::IssueSource;
use crate::config::TrackerConfig;
use crate::error::{Result, RofiJiraError};
use crate::settings::Settings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

/// Issue search against a Jira server using basic authentication.
///
/// No timeouts are set: a server that never answers blocks the search.
pub struct JiraClient {
    client: Client,
    server_url: String,
    username: String,
    password: String,
}

impl JiraClient {
    /// Create a client for `server_url`.
    ///
    /// With `accept_invalid_certs` the TLS certificate is not verified, which
    /// is what self-signed Jira deployments need and what callers accept by
    /// passing `true`.
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        accept_invalid_certs: bool,
    ) -> Result<Self> {
        let server_url = server_url.into();
        let client = Client::builder()
            .user_agent(TrackerConfig::USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| RofiJiraError::Connection {
                server: server_url.clone(),
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self {
            client,
            server_url,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Create a client from the run settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.server_url.clone(),
            settings.username.clone(),
            settings.password.clone(),
            settings.accept_invalid_certs,
        )
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            TrackerConfig::SEARCH_PATH
        )
    }

    /// Run `jql` and return at most [`TrackerConfig::MAX_RESULTS`] issues in
    /// server order.
    pub async fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        let url = self.search_url();
        let max_results = TrackerConfig::MAX_RESULTS.to_string();
        debug!("GET {} as {} (jql: {})", url, self.username, jql);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[
                ("jql", jql),
                ("startAt", "0"),
                ("maxResults", max_results.as_str()),
                ("fields", TrackerConfig::FIELDS),
            ])
            .send()
            .await
            .map_err(|e| RofiJiraError::Connection {
                server: self.server_url.clone(),
                message: e.to_string(),
                source: Some(e),
            })?;

        let status = response.status();
        if Self::is_auth_failure(status) {
            return Err(RofiJiraError::Authentication {
                server: self.server_url.clone(),
                status_code: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.summary());
            return Err(RofiJiraError::Query {
                message: detail.unwrap_or_else(|| format!("Jira returned {}", status)),
                status_code: Some(status.as_u16()),
            });
        }

        let results: SearchResponse = response.json().await.map_err(|e| RofiJiraError::Query {
            message: format!("Failed to parse Jira search response: {}", e),
            status_code: Some(status.as_u16()),
        })?;

        let issues: Vec<Issue> = results.issues.into_iter().map(Issue::from).collect();
        info!(
            "Jira returned {} issues (total matching: {:?})",
            issues.len(),
            results.total
        );
        Ok(issues)
    }

    /// Credentials rejected or not allowed to search.
    pub fn is_auth_failure(status: StatusCode) -> bool {
        matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
    }
}

#[async_trait]
impl IssueSource for JiraClient {
    async fn search(&self, query: &str) -> Result<Vec<Issue>> {
        self.search_issues(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_joins_with_single_slash() {
        let client = JiraClient::new("https://h/jira", "u", "p", true).unwrap();
        assert_eq!(client.search_url(), "https://h/jira/rest/api/2/search");

        let client = JiraClient::new("https://h/jira/", "u", "p", true).unwrap();
        assert_eq!(client.search_url(), "https://h/jira/rest/api/2/search");
    }

    #[test]
    fn test_auth_failure_statuses() {
        assert!(JiraClient::is_auth_failure(StatusCode::UNAUTHORIZED));
        assert!(JiraClient::is_auth_failure(StatusCode::FORBIDDEN));

        assert!(!JiraClient::is_auth_failure(StatusCode::OK));
        assert!(!JiraClient::is_auth_failure(StatusCode::BAD_REQUEST));
        assert!(!JiraClient::is_auth_failure(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::new()
            .with_server_url("https://jira.example.com")
            .with_credentials("jdoe", "secret");
        let client = JiraClient::from_settings(&settings).unwrap();
        assert_eq!(client.server_url(), "https://jira.example.com");
    }
}
