//! LLM provider adapters
//!
//! Two gateways implement the [`LlmGateway`] port over plain HTTPS:
//! an OpenAI-compatible chat-completions adapter and an Anthropic messages
//! adapter. Which one serves a query is decided once at startup from config
//! (or inferred from the model family).

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicGateway;
pub use openai::OpenAiGateway;

use bridgechat_application::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use std::time::Duration;

/// Supported provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// Parse a provider name from config ("openai" / "anthropic").
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "anthropic" => Some(ProviderKind::Anthropic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Resolved settings for one provider: everything an adapter needs,
/// passed in explicitly at construction time (no globals).
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// API key, already resolved from config or environment.
    pub api_key: String,
    /// Base URL of the provider API.
    pub base_url: String,
    /// Anthropic API version header (ignored by the OpenAI adapter).
    pub api_version: Option<String>,
    /// Sampling temperature for completions.
    pub temperature: f32,
    /// Token cap per completion.
    pub max_tokens: u32,
    /// Request deadline for the completion call.
    pub timeout: Duration,
}

/// Build the gateway for the resolved settings.
pub fn build_gateway(settings: ProviderSettings) -> Arc<dyn LlmGateway> {
    match settings.kind {
        ProviderKind::OpenAi => Arc::new(OpenAiGateway::new(settings)),
        ProviderKind::Anthropic => Arc::new(AnthropicGateway::new(settings)),
    }
}

/// Map an HTTP failure status to a gateway error: auth, quota, missing
/// model, or a plain request failure.
pub(crate) fn error_for_status(status: reqwest::StatusCode, body: &str) -> GatewayError {
    let preview = bridgechat_domain::util::truncate_str(body, 200);
    match status.as_u16() {
        401 | 403 => GatewayError::AuthFailed(format!("{}: {}", status, preview)),
        429 => GatewayError::RateLimited(format!("{}: {}", status, preview)),
        404 => GatewayError::ModelNotAvailable(format!("{}: {}", status, preview)),
        _ => GatewayError::RequestFailed(format!("{}: {}", status, preview)),
    }
}

/// Map a transport-level reqwest failure.
pub(crate) fn error_for_transport(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_names() {
        assert_eq!(ProviderKind::parse("openai"), Some(ProviderKind::OpenAi));
        assert_eq!(
            ProviderKind::parse("Anthropic"),
            Some(ProviderKind::Anthropic)
        );
        assert_eq!(ProviderKind::parse("bedrock"), None);
    }

    #[test]
    fn status_errors_are_categorized() {
        use reqwest::StatusCode;
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::AuthFailed(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, "no such model"),
            GatewayError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::RequestFailed(_)
        ));
    }
}
