//! LLM session response types

pub mod response;
