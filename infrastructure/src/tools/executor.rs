//! Mapping tool executor, the concrete implementation of
//! [`ToolExecutorPort`].
//!
//! Bridges the application layer's abstract port with the BridgeDB HTTP
//! client: every call is resolved against the tool spec, validated against
//! its definition, and only then allowed to touch the network.

use async_trait::async_trait;
use bridgechat_application::ports::tool_executor::ToolExecutorPort;
use bridgechat_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};

use super::mapping;
use crate::bridgedb::BridgeDbClient;

/// Executor that runs the mapping tools against BridgeDB.
#[derive(Debug, Clone)]
pub struct MappingToolExecutor {
    tool_spec: ToolSpec,
    client: BridgeDbClient,
}

impl MappingToolExecutor {
    /// Create an executor with the default tool spec and the given client.
    pub fn new(client: BridgeDbClient) -> Self {
        Self {
            tool_spec: super::default_tool_spec(),
            client,
        }
    }
}

#[async_trait]
impl ToolExecutorPort for MappingToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("Unknown tool: {}", call.tool_name)),
            );
        };

        let validator = DefaultToolValidator;
        if let Err(e) = validator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        match call.tool_name.as_str() {
            mapping::MAP_IDENTIFIER => mapping::execute_map_identifier(&self.client, call).await,
            mapping::MAP_COMPOUND => mapping::execute_map_compound(&self.client, call).await,
            // Unreachable: tool_spec.get() above already filtered unknown names
            other => ToolResult::failure(other, ToolError::not_found(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> MappingToolExecutor {
        MappingToolExecutor::new(BridgeDbClient::default())
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let call = ToolCall::new("drop_database");
        let result = executor().execute(&call).await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_arguments_are_rejected_before_execution() {
        let call = ToolCall::new(mapping::MAP_IDENTIFIER).with_arg("format", "json");
        let result = executor().execute(&call).await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[test]
    fn executor_exposes_the_default_spec() {
        let executor = executor();
        assert!(executor.has_tool(mapping::MAP_IDENTIFIER));
        assert!(executor.has_tool(mapping::MAP_COMPOUND));
        assert!(!executor.has_tool("run_command"));
    }
}
