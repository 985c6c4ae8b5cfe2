//! Model identifier value object

use serde::{Deserialize, Serialize};

/// An LLM model identifier (e.g. "gpt-4o-mini", "claude-haiku-4-5").
///
/// Providers retire and rename models faster than this crate releases, so
/// names are carried as opaque strings with family helpers used for
/// provider inference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for Anthropic Claude family models.
    pub fn is_claude(&self) -> bool {
        self.0.starts_with("claude")
    }

    /// True for OpenAI GPT family models.
    pub fn is_gpt(&self) -> bool {
        self.0.starts_with("gpt")
    }
}

impl Default for Model {
    fn default() -> Self {
        Self("gpt-4o-mini".to_string())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_helpers() {
        assert!(Model::new("claude-haiku-4-5").is_claude());
        assert!(!Model::new("claude-haiku-4-5").is_gpt());
        assert!(Model::new("gpt-4o-mini").is_gpt());
        assert!(!Model::new("gpt-4o-mini").is_claude());
    }

    #[test]
    fn default_is_tool_capable_small_model() {
        assert_eq!(Model::default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn display_round_trip() {
        let m: Model = "gpt-4o".into();
        assert_eq!(m.to_string(), "gpt-4o");
    }
}
