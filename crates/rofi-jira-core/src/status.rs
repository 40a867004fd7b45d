//! Workflow status glyphs shown in front of each issue.

/// Glyph for statuses not in the table.
pub const UNKNOWN_GLYPH: &str = "?";

/// Map a Jira status name to its display glyph.
///
/// Matching ignores case and surrounding whitespace. "Code Review" maps to an
/// empty glyph.
pub fn glyph(status_name: &str) -> &'static str {
    match status_name.trim().to_lowercase().as_str() {
        "backlog" => "B",
        "to do" => "⚐",
        "in progress" => "⚑",
        "waiting on task" => "⚡",
        "code review" => "",
        "awaiting verification" => "✓",
        "done" => "✔",
        "cancelled" => "✘",
        _ => UNKNOWN_GLYPH,
    }
}
