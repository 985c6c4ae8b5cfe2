//! Mapping tools exposed to the model

pub mod executor;
pub mod mapping;
pub mod schema;

pub use executor::MappingToolExecutor;
pub use schema::JsonSchemaToolConverter;

use bridgechat_domain::tool::entities::ToolSpec;

/// The tools the model may call: one identifier lookup, one compound lookup.
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(mapping::map_identifier_definition())
        .register(mapping::map_compound_definition())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_has_both_mapping_tools() {
        let spec = default_tool_spec();
        assert_eq!(spec.len(), 2);
        assert!(spec.get(mapping::MAP_IDENTIFIER).is_some());
        assert!(spec.get(mapping::MAP_COMPOUND).is_some());
    }
}
