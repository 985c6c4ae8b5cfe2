//! Query result entities

use serde::{Deserialize, Serialize};

/// Summary of the mapping lookup a query triggered, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSummary {
    /// Tool that ran (e.g. "map_identifier").
    pub tool: String,
    /// The arguments the model supplied, as reported by the provider.
    pub arguments: serde_json::Value,
    /// Whether the lookup succeeded.
    pub success: bool,
    /// Wall-clock duration of the lookup, when measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// The outcome of one natural-language query: the answer text to display,
/// plus enough context to render richer output formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The question as asked.
    pub question: String,
    /// Model that produced the completion.
    pub model: String,
    /// Display text: either the completion itself or the rendered lookup.
    pub answer: String,
    /// Present when the model requested a lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupSummary>,
}

impl QueryResult {
    /// A result answered directly from the completion, no lookup.
    pub fn direct(
        question: impl Into<String>,
        model: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            model: model.into(),
            answer: answer.into(),
            lookup: None,
        }
    }

    /// A result that went through a mapping lookup.
    pub fn with_lookup(
        question: impl Into<String>,
        model: impl Into<String>,
        answer: impl Into<String>,
        lookup: LookupSummary,
    ) -> Self {
        Self {
            question: question.into(),
            model: model.into(),
            answer: answer.into(),
            lookup: Some(lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_result_has_no_lookup() {
        let result = QueryResult::direct("q", "gpt-4o-mini", "a");
        assert!(result.lookup.is_none());
    }

    #[test]
    fn serializes_without_null_lookup() {
        let result = QueryResult::direct("q", "gpt-4o-mini", "a");
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("lookup"));
    }

    #[test]
    fn lookup_summary_round_trips() {
        let result = QueryResult::with_lookup(
            "q",
            "gpt-4o-mini",
            "a",
            LookupSummary {
                tool: "map_identifier".to_string(),
                arguments: serde_json::json!({"identifier": "ENSG00000139618"}),
                success: true,
                duration_ms: Some(12),
            },
        );
        let json = serde_json::to_string(&result).unwrap();
        let back: QueryResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
