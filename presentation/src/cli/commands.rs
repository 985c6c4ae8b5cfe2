//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for query results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Question, lookup details, and answer
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for bridgechat
#[derive(Parser, Debug)]
#[command(name = "bridgechat")]
#[command(author, version, about = "Ask BridgeDB identifier-mapping questions in plain language")]
#[command(long_about = r#"
bridgechat answers natural-language questions about biological and chemical
identifiers. The question goes to an LLM together with BridgeDB usage
documentation; when the model decides a lookup is needed, it issues a typed
tool call and bridgechat performs one GET against the BridgeDB webservice.

API keys are read from the environment (OPENAI_API_KEY or ANTHROPIC_API_KEY
by default).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./bridgechat.toml   Project-level config
3. ~/.config/bridgechat/config.toml   Global config

Example:
  bridgechat "Map the Ensembl ID ENSG00000139618 to other databases"
  bridgechat -m claude-haiku-4-5 "Find mappings for Busulfan"
  bridgechat --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to complete with (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "answer")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_question() {
        let cli = Cli::try_parse_from(["bridgechat", "Map ENSG00000139618"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("Map ENSG00000139618"));
        assert!(!cli.chat);
    }

    #[test]
    fn parses_chat_mode_with_model() {
        let cli = Cli::try_parse_from(["bridgechat", "--chat", "-m", "claude-haiku-4-5"]).unwrap();
        assert!(cli.chat);
        assert_eq!(cli.model.as_deref(), Some("claude-haiku-4-5"));
        assert!(cli.question.is_none());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["bridgechat", "-vv", "q"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
