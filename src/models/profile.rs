use serde::Deserialize;

use super::lenient;

/// GitHub account record from `/users/{handle}`. Only a handful of fields are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient")]
    pub login: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub avatar_url: Option<String>,
}
