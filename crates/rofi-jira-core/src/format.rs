//! Display lines for the issue picker.
//!
//! The `[<glyph>] <key> : <summary>` layout is parsed back by
//! [`crate::dispatch::extract_issue_key`]; change both together.

use crate::jira::Issue;
use crate::status::glyph;

/// Render one issue as a picker line.
pub fn format_issue(issue: &Issue) -> String {
    format!(
        "[{}] {} : {}",
        glyph(&issue.status_name),
        issue.key,
        single_line(&issue.summary)
    )
}

/// Render every issue, keeping order.
pub fn format_issues(issues: &[Issue]) -> Vec<String> {
    issues.iter().map(format_issue).collect()
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_done_issue() {
        let issue = Issue::new("X-1", "Fix bug", "Done");
        assert_eq!(format_issue(&issue), "[✔] X-1 : Fix bug");
    }

    #[test]
    fn test_format_blank_and_unknown_glyphs() {
        assert_eq!(
            format_issue(&Issue::new("X-2", "Review me", "Code Review")),
            "[] X-2 : Review me"
        );
        assert_eq!(
            format_issue(&Issue::new("X-3", "Odd", "Triage")),
            "[?] X-3 : Odd"
        );
    }

    #[test]
    fn test_summary_kept_on_one_line() {
        let issue = Issue::new("X-4", "first\nsecond\r\nthird", "Backlog");
        assert_eq!(format_issue(&issue), "[B] X-4 : first second third");
    }

    #[test]
    fn test_format_issues_keeps_order() {
        let issues = vec![
            Issue::new("X-9", "later", "To Do"),
            Issue::new("X-1", "earlier", "In Progress"),
        ];
        assert_eq!(
            format_issues(&issues),
            vec!["[⚐] X-9 : later", "[⚑] X-1 : earlier"]
        );
    }
}
