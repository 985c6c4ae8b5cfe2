//! Identifier-mapping domain types
//!
//! Models the BridgeDB xrefs vocabulary: datasources identified by system
//! codes, species, and cross-reference (xref) rows returned by the service.

pub mod datasource;
pub mod format;
pub mod species;
pub mod xref;
