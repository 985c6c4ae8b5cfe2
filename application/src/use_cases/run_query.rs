//! Run Query use case.
//!
//! Executes one natural-language query: a single completion round with the
//! mapping tools attached, then at most one lookup.
//!
//! Each invocation makes zero or one LLM call and zero or one BridgeDB
//! call. When the completion carries no tool use, its text is the answer,
//! returned unmodified. When it does, the first instruction runs and the
//! rendered lookup result becomes the answer; there is no second completion
//! round.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::QueryProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use bridgechat_domain::util::truncate_str;
use bridgechat_domain::{LookupSummary, Model, PromptTemplate, Question, QueryResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during query execution.
#[derive(Error, Debug)]
pub enum RunQueryError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Input for the [`RunQueryUseCase`].
#[derive(Debug, Clone)]
pub struct RunQueryInput {
    /// The user's question.
    pub question: Question,
    /// Model to complete with.
    pub model: Model,
}

impl RunQueryInput {
    pub fn new(question: Question, model: Model) -> Self {
        Self { question, model }
    }
}

/// Use case for answering one natural-language mapping question.
///
/// Flow:
/// 1. Create a session whose system prompt is the BridgeDB usage
///    documentation
/// 2. Send the question with the mapping tool schemas attached
/// 3. No tool use → the completion text is the answer
/// 4. Tool use → execute the first instruction, render its result
pub struct RunQueryUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunQueryUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the query with progress callbacks.
    pub async fn execute(
        &self,
        input: RunQueryInput,
        progress: &dyn QueryProgressNotifier,
    ) -> Result<QueryResult, RunQueryError> {
        info!(
            "Running query: {}",
            truncate_str(input.question.content(), 100)
        );

        let session = self
            .gateway
            .create_session(&input.model, PromptTemplate::system())
            .await?;

        let tools = self.tool_schema.all_tools_schema(self.tool_executor.tool_spec());
        debug!(
            "Query: using model {}, {} mapping tools attached",
            input.model,
            tools.len()
        );

        progress.on_completion_started(&input.model);
        let response = session
            .send_with_tools(&PromptTemplate::user_query(&input.question), &tools)
            .await;
        progress.on_completion_finished();
        let response = response?;

        self.conversation_logger.log(ConversationEvent::new(
            "completion",
            serde_json::json!({
                "model": input.model.to_string(),
                "text": response.text_content(),
                "tool_calls": response.tool_calls().len(),
            }),
        ));

        let mut tool_calls = response.tool_calls();

        if tool_calls.is_empty() {
            // Direct answer: the completion text, unmodified.
            let answer = response.text_content();
            if answer.is_empty() {
                return Err(RunQueryError::EmptyResponse);
            }
            return Ok(QueryResult::direct(
                input.question.into_content(),
                input.model.to_string(),
                answer,
            ));
        }

        if tool_calls.len() > 1 {
            warn!(
                "Model requested {} lookups; executing only the first",
                tool_calls.len()
            );
        }
        let call = tool_calls.remove(0);

        progress.on_lookup_started(&call.tool_name);
        let started = std::time::Instant::now();
        let result = self.tool_executor.execute(&call).await;
        let duration_ms = result
            .metadata
            .duration_ms
            .unwrap_or_else(|| started.elapsed().as_millis() as u64);
        progress.on_lookup_finished(result.is_success());

        self.conversation_logger.log(ConversationEvent::new(
            "lookup",
            serde_json::json!({
                "tool": &call.tool_name,
                "arguments": &call.arguments,
                "success": result.is_success(),
                "duration_ms": duration_ms,
            }),
        ));

        let body = if result.is_success() {
            result.output().unwrap_or("").to_string()
        } else {
            let error = result
                .error()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unknown error".to_string());
            format!("Mapping lookup failed: {}", error)
        };

        // Keep any text the model produced before the instruction.
        let lead = response.text_content();
        let answer = if lead.is_empty() {
            body
        } else {
            format!("{}\n\n{}", lead, body)
        };

        let lookup = LookupSummary {
            tool: call.tool_name.clone(),
            arguments: serde_json::to_value(&call.arguments)
                .unwrap_or(serde_json::Value::Null),
            success: result.is_success(),
            duration_ms: Some(duration_ms),
        };

        info!(
            "Query completed with one {} lookup (success: {})",
            lookup.tool, lookup.success
        );

        Ok(QueryResult::with_lookup(
            input.question.into_content(),
            input.model.to_string(),
            answer,
            lookup,
        ))
    }
}
