//! Application layer for bridgechat
//!
//! This crate contains the query orchestrator use case and the port
//! definitions it drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoQueryProgress, QueryProgressNotifier},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::run_query::{RunQueryError, RunQueryInput, RunQueryUseCase};
