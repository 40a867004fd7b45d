//! Jira search response types.
//!
//! Only the issue key, summary and status name are read from the search
//! response; serde ignores every other field.

use serde::Deserialize;

/// An issue as far as rofi-jira cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status_name: String,
}

impl Issue {
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        status_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            status_name: status_name.into(),
        }
    }
}

/// Body of `GET rest/api/2/search`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStatus {
    #[serde(default)]
    pub name: String,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Issue {
            key: raw.key,
            summary: raw.fields.summary.unwrap_or_default(),
            status_name: raw.fields.status.map(|s| s.name).unwrap_or_default(),
        }
    }
}

/// Error body Jira sends with 4xx/5xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: serde_json::Map<String, serde_json::Value>,
}

impl ErrorResponse {
    /// All messages joined into one line, or `None` if the body had none.
    pub fn summary(&self) -> Option<String> {
        let mut messages = self.error_messages.clone();
        for (field, value) in &self.errors {
            match value.as_str() {
                Some(text) => messages.push(format!("{}: {}", field, text)),
                None => messages.push(format!("{}: {}", field, value)),
            }
        }

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_from_full_response() {
        let body = r#"{
            "expand": "schema,names",
            "startAt": 0,
            "maxResults": 2048,
            "total": 1,
            "issues": [{
                "id": "10001",
                "self": "https://h/jira/rest/api/2/issue/10001",
                "key": "X-1",
                "fields": {
                    "summary": "Fix bug",
                    "status": {"name": "Done", "id": "10000", "statusCategory": {"key": "done"}},
                    "assignee": null
                }
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total, Some(1));
        let issues: Vec<Issue> = response.issues.into_iter().map(Issue::from).collect();
        assert_eq!(issues, vec![Issue::new("X-1", "Fix bug", "Done")]);
    }

    #[test]
    fn test_issue_with_missing_fields() {
        let body = r#"{"issues": [{"key": "X-2"}, {"key": "X-3", "fields": {"summary": null}}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let issues: Vec<Issue> = response.issues.into_iter().map(Issue::from).collect();
        assert_eq!(issues[0], Issue::new("X-2", "", ""));
        assert_eq!(issues[1], Issue::new("X-3", "", ""));
    }

    #[test]
    fn test_error_summary() {
        let body = r#"{
            "errorMessages": ["Error in the JQL Query: Expecting operator"],
            "errors": {"jql": "bad"}
        }"#;
        let error: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            error.summary().unwrap(),
            "Error in the JQL Query: Expecting operator; jql: bad"
        );

        assert!(ErrorResponse::default().summary().is_none());
    }
}
