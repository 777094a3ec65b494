use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Base URL or endpoint could not form a request URL
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    /// Transport failure: connection refused, DNS, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status
    #[error("Search endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// The body was not a JSON array of suggestions
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One match returned by the search endpoint
///
/// Fields are not validated: missing or null values become empty strings and
/// other non-string values keep their JSON text, so one odd item never fails
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuggestionItem {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub avatar: String,
}

impl SuggestionItem {
    pub fn new(name: &str, avatar: &str) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Parse a response body into suggestions, preserving server order
pub fn parse_suggestions(body: &str) -> Result<Vec<SuggestionItem>, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
