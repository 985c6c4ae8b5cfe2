//! Species value object

use serde::{Deserialize, Serialize};

/// The organism a lookup is scoped to.
///
/// BridgeDB accepts both common names ("Human") and Latin names
/// ("Homo sapiens") in the URL path, so the value passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Species(String);

impl Species {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self(name.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Species {
    fn default() -> Self {
        Self("Human".to_string())
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
