//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing provider-neutral
//! JSON Schema for the native tool use API. Provider adapters reshape this
//! into their own envelope where needed.

use bridgechat_application::ports::tool_schema::ToolSchemaPort;
use bridgechat_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::mapping;

    #[test]
    fn converts_map_identifier_to_schema() {
        let converter = JsonSchemaToolConverter;
        let schema = converter.tool_to_schema(&mapping::map_identifier_definition());

        assert_eq!(schema["name"], "map_identifier");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(
            schema["input_schema"]["properties"]["identifier"]["type"],
            "string"
        );

        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("identifier")));
        assert!(required.contains(&serde_json::json!("source")));
        assert!(!required.contains(&serde_json::json!("species")));
    }

    #[test]
    fn all_tools_schema_is_sorted_by_name() {
        let converter = JsonSchemaToolConverter;
        let tools = converter.all_tools_schema(&crate::tools::default_tool_spec());

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "map_compound");
        assert_eq!(tools[1]["name"], "map_identifier");
    }
}
