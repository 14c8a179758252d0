use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Entry of `/users/{handle}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub html_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub homepage: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
}

impl Repository {
    /// Reads one list entry. Unreadable fields take their defaults; an entry
    /// that isn't a record at all becomes an empty card.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("Malformed repository entry, using defaults: {}", e);
            Repository::default()
        })
    }
}
