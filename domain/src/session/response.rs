//! Structured LLM responses for the native tool use protocol.
//!
//! A completion is a sequence of content blocks mixing text with typed tool
//! use requests. This replaces free-text inspection of the completion: the
//! provider API enforces tool names and argument schemas, so "did the model
//! ask for a lookup" is a structural check, not a parse.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within an LLM response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text(String),

    /// A tool use request from the model.
    ///
    /// The API assigns the `id`, enforces `name` against the provided tool
    /// definitions, and validates `input` against the JSON schema.
    ToolUse {
        /// API-assigned ID (e.g. "toolu_abc123" or "call_abc123").
        id: String,
        /// Canonical tool name, guaranteed valid by the API.
        name: String,
        /// Structured arguments validated against the tool's JSON schema.
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response: the model is done.
    EndTurn,
    /// The model wants to call a tool.
    ToolUse,
    /// Hit the token limit; the response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

/// A structured response from an LLM, supporting both text and tool use.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    ///
    /// Each block becomes a `ToolCall` with `native_id` set to the
    /// API-assigned ID.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_creates_text_only_response() {
        let response = LlmResponse::from_text("BridgeDB maps identifiers between databases.");
        assert_eq!(
            response.text_content(),
            "BridgeDB maps identifiers between databases."
        );
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn tool_calls_extraction() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("Looking that up.".to_string()),
                ContentBlock::ToolUse {
                    id: "toolu_1".to_string(),
                    name: "map_identifier".to_string(),
                    input: [
                        (
                            "identifier".to_string(),
                            serde_json::json!("ENSG00000139618"),
                        ),
                        ("source".to_string(), serde_json::json!("En")),
                    ]
                    .into_iter()
                    .collect(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: Some("gpt-4o-mini".to_string()),
        };

        assert!(response.has_tool_calls());
        assert_eq!(response.text_content(), "Looking that up.");

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "map_identifier");
        assert_eq!(calls[0].native_id, Some("toolu_1".to_string()));
        assert_eq!(calls[0].get_string("identifier"), Some("ENSG00000139618"));
    }

    #[test]
    fn empty_response() {
        let response = LlmResponse {
            content: vec![],
            stop_reason: None,
            model: None,
        };
        assert_eq!(response.text_content(), "");
        assert!(!response.has_tool_calls());
    }

    #[test]
    fn content_block_accessors() {
        let text = ContentBlock::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_tool_use().is_none());

        let tool = ContentBlock::ToolUse {
            id: "call_1".to_string(),
            name: "map_compound".to_string(),
            input: HashMap::new(),
        };
        assert!(tool.as_text().is_none());
        let (id, name, input) = tool.as_tool_use().unwrap();
        assert_eq!(id, "call_1");
        assert_eq!(name, "map_compound");
        assert!(input.is_empty());
    }
}
