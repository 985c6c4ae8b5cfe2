//! Anthropic messages adapter.
//!
//! The messages API already speaks in content blocks, so the conversion to
//! [`LlmResponse`] is direct; provider-neutral tool schemas are accepted
//! as-is.

use async_trait::async_trait;
use bridgechat_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use bridgechat_domain::session::response::{ContentBlock, LlmResponse, StopReason};
use bridgechat_domain::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{ProviderSettings, error_for_status, error_for_transport};

/// Default API version header when config does not pin one.
const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Gateway for the Anthropic messages API.
pub struct AnthropicGateway {
    http: reqwest::Client,
    settings: ProviderSettings,
}

impl AnthropicGateway {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(settings.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            settings,
        }
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(AnthropicSession {
            http: self.http.clone(),
            settings: self.settings.clone(),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
        }))
    }
}

/// One conversation with an Anthropic model. Single-query, no history.
struct AnthropicSession {
    http: reqwest::Client,
    settings: ProviderSettings,
    model: Model,
    system_prompt: String,
}

#[async_trait]
impl LlmSession for AnthropicSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        let request = MessagesRequest {
            model: self.model.as_str(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            system: &self.system_prompt,
            messages: vec![UserMessage {
                role: "user",
                content,
            }],
            tools,
        };

        let url = format!(
            "{}/v1/messages",
            self.settings.base_url.trim_end_matches('/')
        );
        debug!("Messages request to {} ({})", url, self.model);

        let api_version = self
            .settings
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", api_version)
            .json(&request)
            .send()
            .await
            .map_err(error_for_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(convert_response(body))
    }
}

fn convert_response(body: MessagesResponse) -> LlmResponse {
    let content = body
        .content
        .into_iter()
        .map(|block| match block {
            ApiContentBlock::Text { text } => ContentBlock::Text(text),
            ApiContentBlock::ToolUse { id, name, input } => {
                ContentBlock::ToolUse { id, name, input }
            }
        })
        .collect();

    let stop_reason = body.stop_reason.map(|reason| match reason.as_str() {
        "end_turn" => StopReason::EndTurn,
        "tool_use" => StopReason::ToolUse,
        "max_tokens" => StopReason::MaxTokens,
        other => StopReason::Other(other.to_string()),
    });

    LlmResponse {
        content,
        stop_reason,
        model: body.model,
    }
}

// ==================== Wire types ====================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<UserMessage<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tools: &'a [serde_json::Value],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ApiContentBlock>,
    stop_reason: Option<String>,
    model: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ApiContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> MessagesResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn converts_text_reply() {
        let body = parse(serde_json::json!({
            "model": "claude-haiku-4-5",
            "content": [{ "type": "text", "text": "Hello." }],
            "stop_reason": "end_turn"
        }));
        let response = convert_response(body);
        assert_eq!(response.text_content(), "Hello.");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn converts_tool_use_reply() {
        let body = parse(serde_json::json!({
            "model": "claude-haiku-4-5",
            "content": [
                { "type": "text", "text": "Looking that up." },
                {
                    "type": "tool_use",
                    "id": "toolu_1",
                    "name": "map_compound",
                    "input": { "name": "Aspirin" }
                }
            ],
            "stop_reason": "tool_use"
        }));
        let response = convert_response(body);
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "map_compound");
        assert_eq!(calls[0].get_string("name"), Some("Aspirin"));
    }

    #[test]
    fn unknown_stop_reason_is_preserved() {
        let body = parse(serde_json::json!({
            "content": [{ "type": "text", "text": "x" }],
            "stop_reason": "pause_turn"
        }));
        let response = convert_response(body);
        assert_eq!(
            response.stop_reason,
            Some(StopReason::Other("pause_turn".to_string()))
        );
    }
}
