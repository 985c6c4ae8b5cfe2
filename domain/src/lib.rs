//! Domain layer for bridgechat
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Query
//!
//! A single natural-language question about biological or chemical
//! identifiers. Each query produces at most one LLM completion and at most
//! one BridgeDB lookup, and yields one [`QueryResult`] for display.
//!
//! ## Typed tool calls
//!
//! The LLM signals "call the mapping API" through the provider's native
//! tool use protocol, not free text: a [`ToolCall`] with schema-validated
//! arguments, answered by a [`ToolResult`].

pub mod core;
pub mod mapping;
pub mod prompt;
pub mod query;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use crate::core::{error::DomainError, model::Model, question::Question};
pub use mapping::{
    datasource::DataSource,
    format::format_mappings,
    species::Species,
    xref::{Xref, parse_xref_lines},
};
pub use prompt::PromptTemplate;
pub use query::{LookupSummary, QueryResult};
pub use session::response::{ContentBlock, LlmResponse, StopReason};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
