//! BridgeDB REST client

pub mod client;

pub use client::{BridgeDbClient, BridgeDbError, DEFAULT_BASE_URL, DEFAULT_PUBCHEM_BASE_URL};
