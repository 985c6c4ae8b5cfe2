//! Infrastructure layer for bridgechat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: LLM provider gateways, the BridgeDB REST client and
//! mapping tools, configuration file loading, and conversation logging.

pub mod bridgedb;
pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use bridgedb::{BridgeDbClient, BridgeDbError};
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{ProviderKind, ProviderSettings, build_gateway};
pub use tools::{JsonSchemaToolConverter, MappingToolExecutor, default_tool_spec};
