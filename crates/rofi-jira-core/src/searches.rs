//! Named search definitions loaded from the YAML configuration file.
//!
//! ```yaml
//! searches:
//!   mine:
//!     desc: My open tickets
//!     str: assignee = currentUser() AND resolution = Unresolved
//! ```

use crate::error::{Result, RofiJiraError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// A named, preconfigured query with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefinition {
    /// Key of the entry under `searches`.
    pub name: String,
    /// Text offered in the picker.
    pub description: String,
    /// JQL query string.
    pub query: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    searches: serde_yaml::Mapping,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    desc: String,
    #[serde(rename = "str")]
    query: String,
}

/// Search definitions in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCatalog {
    definitions: Vec<SearchDefinition>,
}

impl SearchCatalog {
    /// Load the catalog from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RofiJiraError::ConfigNotFound(path.to_path_buf()));
        }

        let contents =
            std::fs::read_to_string(path).map_err(|e| RofiJiraError::io_with_path(e, path))?;
        let catalog = Self::parse(&contents).map_err(|e| match e {
            RofiJiraError::ConfigParse {
                message, source, ..
            } => RofiJiraError::ConfigParse {
                path: path.to_path_buf(),
                message,
                source,
            },
            other => other,
        })?;

        debug!("Loaded {} searches from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a YAML document. Errors carry an empty path; [`Self::load`]
    /// fills it in.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string(), Some(e)))?;

        let mut definitions = Vec::with_capacity(raw.searches.len());
        for (key, value) in raw.searches {
            let name = match key {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(parse_error(
                        format!("search name must be a string, got {:?}", other),
                        None,
                    ))
                }
            };
            let search: RawSearch = serde_yaml::from_value(value)
                .map_err(|e| parse_error(format!("search '{}': {}", name, e), Some(e)))?;

            definitions.push(SearchDefinition {
                name,
                description: search.desc,
                query: search.query,
            });
        }

        Ok(Self { definitions })
    }

    /// Build a catalog directly, keeping the given order.
    pub fn from_definitions(definitions: Vec<SearchDefinition>) -> Self {
        Self { definitions }
    }

    pub fn get(&self, name: &str) -> Option<&SearchDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// First definition whose description equals `text`, both sides trimmed.
    pub fn find_by_description(&self, text: &str) -> Option<&SearchDefinition> {
        let text = text.trim();
        self.definitions
            .iter()
            .find(|d| d.description.trim() == text)
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|d| d.description.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn parse_error(message: String, source: Option<serde_yaml::Error>) -> RofiJiraError {
    RofiJiraError::ConfigParse {
        path: Default::default(),
        message,
        source,
    }
}
