//! map_identifier and map_compound: the BridgeDB lookups the model can
//! request.
//!
//! Each execution performs at most one BridgeDB call. map_compound also
//! makes one PubChem call to turn a chemical name into a CID before the
//! mapping itself.

use crate::bridgedb::{BridgeDbClient, BridgeDbError};
use bridgechat_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use bridgechat_domain::{DataSource, Species, format_mappings};
use std::time::Instant;

/// Tool name constants
pub const MAP_IDENTIFIER: &str = "map_identifier";
pub const MAP_COMPOUND: &str = "map_compound";

/// Definition of the identifier-mapping tool
pub fn map_identifier_definition() -> ToolDefinition {
    ToolDefinition::new(
        MAP_IDENTIFIER,
        "Map a database identifier to equivalent identifiers in other biological \
         and chemical databases via BridgeDB.",
    )
    .with_parameter(ToolParameter::new(
        "identifier",
        "The identifier to map (e.g. 'ENSG00000139618', 'TP53', 'HGNC:1101', '2478')",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "source",
        "The database the identifier comes from, as a BridgeDB system code \
         ('En', 'H', 'Cpc', ...) or a database name ('Ensembl', 'HGNC', ...)",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "species",
        "Organism scope (default: 'Human')",
        false,
    ))
}

/// Definition of the compound-by-name tool
pub fn map_compound_definition() -> ToolDefinition {
    ToolDefinition::new(
        MAP_COMPOUND,
        "Map a chemical compound by name (e.g. 'Aspirin'). The name is resolved \
         to a PubChem CID first, then mapped to other chemical databases.",
    )
    .with_parameter(ToolParameter::new(
        "name",
        "The compound name to look up",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "species",
        "Organism scope (default: 'Human')",
        false,
    ))
}

/// Execute map_identifier: one xrefs GET, rendered for display.
pub async fn execute_map_identifier(client: &BridgeDbClient, call: &ToolCall) -> ToolResult {
    let start = Instant::now();

    let identifier = match call.require_string("identifier") {
        Ok(v) => v,
        Err(e) => return ToolResult::failure(MAP_IDENTIFIER, ToolError::invalid_argument(e)),
    };
    let source = match call.require_string("source") {
        Ok(v) => DataSource::resolve(v),
        Err(e) => return ToolResult::failure(MAP_IDENTIFIER, ToolError::invalid_argument(e)),
    };
    let species = call
        .get_string("species")
        .map(Species::new)
        .unwrap_or_default();

    match client.xrefs(&species, &source, identifier).await {
        Ok(xrefs) => {
            let output = format_mappings(identifier, &source, &xrefs);
            ToolResult::success(MAP_IDENTIFIER, output).with_metadata(ToolResultMetadata {
                duration_ms: Some(start.elapsed().as_millis() as u64),
                mapping_count: Some(xrefs.len()),
                url: client
                    .xrefs_url(&species, &source, identifier)
                    .ok()
                    .map(|u| u.to_string()),
                ..Default::default()
            })
        }
        Err(e) => ToolResult::failure(MAP_IDENTIFIER, tool_error_from(e)),
    }
}

/// Execute map_compound: resolve the name to a CID, then one xrefs GET.
pub async fn execute_map_compound(client: &BridgeDbClient, call: &ToolCall) -> ToolResult {
    let start = Instant::now();

    let name = match call.require_string("name") {
        Ok(v) => v,
        Err(e) => return ToolResult::failure(MAP_COMPOUND, ToolError::invalid_argument(e)),
    };
    let species = call
        .get_string("species")
        .map(Species::new)
        .unwrap_or_default();

    let cid = match client.pubchem_cid(name).await {
        Ok(cid) => cid,
        Err(e) => return ToolResult::failure(MAP_COMPOUND, tool_error_from(e)),
    };

    let source = DataSource::pubchem_compound();
    match client.xrefs(&species, &source, &cid).await {
        Ok(xrefs) => {
            let output = format!(
                "Resolved compound '{}' to PubChem CID {}.\n\n{}",
                name,
                cid,
                format_mappings(&cid, &source, &xrefs)
            );
            ToolResult::success(MAP_COMPOUND, output).with_metadata(ToolResultMetadata {
                duration_ms: Some(start.elapsed().as_millis() as u64),
                mapping_count: Some(xrefs.len()),
                ..Default::default()
            })
        }
        Err(e) => ToolResult::failure(MAP_COMPOUND, tool_error_from(e)),
    }
}

fn tool_error_from(e: BridgeDbError) -> ToolError {
    match e {
        BridgeDbError::Timeout => ToolError::timeout("mapping request"),
        BridgeDbError::CompoundNotFound(name) => {
            ToolError::not_found(format!("no PubChem CID for '{}'", name))
        }
        other => ToolError::execution_failed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgechat_domain::tool::entities::ToolCall;

    #[tokio::test]
    async fn missing_identifier_fails_before_any_request() {
        // Client points at the real service, but validation fails first.
        let client = BridgeDbClient::default();
        let call = ToolCall::new(MAP_IDENTIFIER).with_arg("source", "En");
        let result = execute_map_identifier(&client, &call).await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn missing_compound_name_fails_before_any_request() {
        let client = BridgeDbClient::default();
        let call = ToolCall::new(MAP_COMPOUND);
        let result = execute_map_compound(&client, &call).await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[test]
    fn error_codes_map_onto_bridgedb_failures() {
        assert_eq!(tool_error_from(BridgeDbError::Timeout).code, "TIMEOUT");
        assert_eq!(
            tool_error_from(BridgeDbError::CompoundNotFound("x".to_string())).code,
            "NOT_FOUND"
        );
        assert_eq!(
            tool_error_from(BridgeDbError::Status {
                status: 500,
                reason: "Internal Server Error".to_string()
            })
            .code,
            "EXECUTION_FAILED"
        );
    }

    #[test]
    fn definitions_declare_required_parameters() {
        let def = map_identifier_definition();
        let required: Vec<_> = def
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(required, vec!["identifier", "source"]);

        let def = map_compound_definition();
        assert!(def.parameters.iter().any(|p| p.name == "name" && p.required));
    }
}
