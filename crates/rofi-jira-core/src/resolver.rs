//! Decide which configured search to run.

use crate::config::PickerConfig;
use crate::error::{Result, RofiJiraError};
use crate::picker::Picker;
use crate::searches::SearchCatalog;
use tracing::{info, warn};

/// Result of resolving a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// JQL query to run.
    Query(String),
    /// The user backed out of the picker.
    Cancelled,
}

/// Resolve the query to run.
///
/// A non-empty `search_name` is looked up directly and the picker is never
/// shown. Otherwise the descriptions are offered in the picker and the chosen
/// one is matched back to its definition.
pub async fn resolve(
    search_name: Option<&str>,
    catalog: &SearchCatalog,
    picker: &dyn Picker,
) -> Result<Resolution> {
    if let Some(name) = search_name.filter(|n| !n.is_empty()) {
        let definition = catalog
            .get(name)
            .ok_or_else(|| RofiJiraError::UnknownSearchName {
                name: name.to_string(),
            })?;
        info!("Using search '{}'", definition.name);
        return Ok(Resolution::Query(definition.query.clone()));
    }

    let selection = picker
        .show(PickerConfig::SEARCH_PROMPT, &catalog.descriptions())
        .await?;
    if selection.is_cancelled() {
        return Ok(Resolution::Cancelled);
    }

    match catalog.find_by_description(&selection.text) {
        Some(definition) => {
            info!("Selected search '{}'", definition.name);
            Ok(Resolution::Query(definition.query.clone()))
        }
        None => {
            warn!("Picker returned unknown description {:?}", selection.text);
            Err(RofiJiraError::NoMatchingSearch {
                selection: selection.text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::Selection;
    use crate::searches::SearchDefinition;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned answer and records what it was shown.
    struct CannedPicker {
        answer: String,
        shown: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl CannedPicker {
        fn new(answer: &str) -> Self {
            Self {
                answer: answer.to_string(),
                shown: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.shown.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Picker for CannedPicker {
        async fn show(&self, prompt: &str, lines: &[String]) -> Result<Selection> {
            self.shown
                .lock()
                .unwrap()
                .push((prompt.to_string(), lines.to_vec()));
            Ok(Selection::new(self.answer.clone(), 0))
        }
    }

    fn catalog() -> SearchCatalog {
        SearchCatalog::from_definitions(vec![
            SearchDefinition {
                name: "a".into(),
                description: "Alpha".into(),
                query: "project=A".into(),
            },
            SearchDefinition {
                name: "b".into(),
                description: "Beta ".into(),
                query: "project=B".into(),
            },
        ])
    }

    #[tokio::test]
    async fn test_named_search_skips_picker() {
        let picker = CannedPicker::new("Beta");
        let resolution = resolve(Some("a"), &catalog(), &picker).await.unwrap();
        assert_eq!(resolution, Resolution::Query("project=A".into()));
        assert!(picker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_named_search() {
        let picker = CannedPicker::new("Alpha");
        let result = resolve(Some("zzz"), &catalog(), &picker).await;
        assert!(matches!(
            result,
            Err(RofiJiraError::UnknownSearchName { ref name }) if name == "zzz"
        ));
        assert!(picker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_uses_picker() {
        let picker = CannedPicker::new("Alpha\n");
        let resolution = resolve(Some(""), &catalog(), &picker).await.unwrap();
        assert_eq!(resolution, Resolution::Query("project=A".into()));

        let calls = picker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Search ... : ");
        assert_eq!(calls[0].1, vec!["Alpha", "Beta "]);
    }

    #[tokio::test]
    async fn test_picked_description_matches_trimmed() {
        let picker = CannedPicker::new("Beta");
        let resolution = resolve(None, &catalog(), &picker).await.unwrap();
        assert_eq!(resolution, Resolution::Query("project=B".into()));
    }

    #[tokio::test]
    async fn test_cancelled_picker() {
        let picker = CannedPicker::new("");
        let resolution = resolve(None, &catalog(), &picker).await.unwrap();
        assert_eq!(resolution, Resolution::Cancelled);
    }

    #[tokio::test]
    async fn test_unmatched_selection() {
        let picker = CannedPicker::new("Gamma");
        let result = resolve(None, &catalog(), &picker).await;
        assert!(matches!(
            result,
            Err(RofiJiraError::NoMatchingSearch { .. })
        ));
    }
}
