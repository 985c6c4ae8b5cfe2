//! Console output formatter for query results

use bridgechat_domain::QueryResult;
use colored::Colorize;

/// Formats query results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full output: question, model, lookup details, answer
    pub fn format(result: &QueryResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), result.model));

        if let Some(lookup) = &result.lookup {
            let status = if lookup.success {
                "ok".green().bold()
            } else {
                "failed".red().bold()
            };
            let duration = lookup
                .duration_ms
                .map(|ms| format!(" in {}ms", ms))
                .unwrap_or_default();
            output.push_str(&format!(
                "{} {} ({}{})\n",
                "Lookup:".cyan().bold(),
                lookup.tool,
                status,
                duration
            ));
        } else {
            output.push_str(&format!(
                "{} {}\n",
                "Lookup:".cyan().bold(),
                "none (answered directly)".dimmed()
            ));
        }

        output.push('\n');
        output.push_str(&result.answer);
        if !result.answer.ends_with('\n') {
            output.push('\n');
        }
        output
    }

    /// Only the answer text
    pub fn format_answer_only(result: &QueryResult) -> String {
        result.answer.clone()
    }

    /// JSON output
    pub fn format_json(result: &QueryResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgechat_domain::{LookupSummary, QueryResult};

    fn sample() -> QueryResult {
        QueryResult::with_lookup(
            "Map ENSG00000139618",
            "gpt-4o-mini",
            "Mapped identifiers for ENSG00000139618 from Ensembl (En):\n- HGNC:1101 (HGNC)\n",
            LookupSummary {
                tool: "map_identifier".to_string(),
                arguments: serde_json::json!({"identifier": "ENSG00000139618"}),
                success: true,
                duration_ms: Some(41),
            },
        )
    }

    #[test]
    fn full_format_carries_question_and_answer() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&sample());
        assert!(text.contains("Map ENSG00000139618"));
        assert!(text.contains("map_identifier"));
        assert!(text.contains("HGNC:1101"));
    }

    #[test]
    fn answer_only_is_verbatim() {
        let result = sample();
        assert_eq!(ConsoleFormatter::format_answer_only(&result), result.answer);
    }

    #[test]
    fn json_round_trips() {
        let text = ConsoleFormatter::format_json(&sample());
        let back: QueryResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn direct_answer_shows_no_lookup() {
        colored::control::set_override(false);
        let result = QueryResult::direct("What is BridgeDB?", "gpt-4o-mini", "A mapping service.");
        let text = ConsoleFormatter::format(&result);
        assert!(text.contains("none (answered directly)"));
    }
}
