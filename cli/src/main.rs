//! CLI entrypoint for bridgechat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use bridgechat_application::{NoQueryProgress, RunQueryInput, RunQueryUseCase};
use bridgechat_domain::{Model, Question};
use bridgechat_infrastructure::{
    BridgeDbClient, ConfigLoader, FileConfig, JsonlConversationLogger, JsonSchemaToolConverter,
    MappingToolExecutor, build_gateway,
};
use bridgechat_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting bridgechat");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to load configuration")?
    };

    // Resolve the model: CLI flag wins over config
    let model = cli
        .model
        .clone()
        .map(Model::from)
        .unwrap_or_else(|| Model::new(&config.query.model));

    // === Dependency Injection ===
    // LLM gateway (API key resolved once, here)
    let kind = config.provider_kind(&model)?;
    let settings = config.provider_settings(kind)?;
    let gateway = build_gateway(settings);

    // BridgeDB client and mapping tools
    let client = BridgeDbClient::new(
        &config.bridgedb.base_url,
        Duration::from_secs(config.bridgedb.timeout_secs),
    )
    .with_pubchem_base_url(&config.bridgedb.pubchem_base_url);
    let executor = Arc::new(MappingToolExecutor::new(client));
    let tool_schema = Arc::new(JsonSchemaToolConverter);

    let mut use_case = RunQueryUseCase::new(gateway, executor, tool_schema);

    // Optional conversation transcript
    if let Some(path) = &config.logging.conversation_file
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation transcript: {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case, model).with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    let question = match Question::try_new(question) {
        Some(q) => q,
        None => bail!("Question cannot be empty."),
    };

    let input = RunQueryInput::new(question, model);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input, &NoQueryProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
