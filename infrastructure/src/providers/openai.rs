//! OpenAI-compatible chat-completions adapter.
//!
//! Works against api.openai.com and any endpoint speaking the same wire
//! format (Azure OpenAI, local gateways). Provider-neutral tool schemas are
//! wrapped in the `{"type": "function", ...}` envelope this API expects,
//! and `tool_calls` in the reply are folded back into [`LlmResponse`]
//! content blocks.

use async_trait::async_trait;
use bridgechat_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use bridgechat_domain::session::response::{ContentBlock, LlmResponse, StopReason};
use bridgechat_domain::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{ProviderSettings, error_for_status, error_for_transport};

/// Gateway for OpenAI-compatible providers.
pub struct OpenAiGateway {
    http: reqwest::Client,
    settings: ProviderSettings,
}

impl OpenAiGateway {
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
impl LlmGateway for OpenAiGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession {
            http: self.http.clone(),
            settings: self.settings.clone(),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
        }))
    }
}

/// One conversation with an OpenAI-compatible model. Single-query: the
/// system prompt and one user message, no history.
struct OpenAiSession {
    http: reqwest::Client,
    settings: ProviderSettings,
    model: Model,
    system_prompt: String,
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        let request = ChatRequest {
            model: self.model.as_str(),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
            tools: tools.iter().map(to_function_tool).collect(),
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );
        debug!("Chat completion request to {} ({})", url, self.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(error_for_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        convert_response(body)
    }
}

/// Wrap a provider-neutral tool schema in the chat-completions envelope.
fn to_function_tool(neutral: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": neutral["name"],
            "description": neutral["description"],
            "parameters": neutral["input_schema"],
        }
    })
}

/// Fold the first choice into content blocks.
fn convert_response(body: ChatResponse) -> Result<LlmResponse, GatewayError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".to_string()))?;

    let mut content = Vec::new();
    if let Some(text) = choice.message.content
        && !text.is_empty()
    {
        content.push(ContentBlock::Text(text));
    }
    for call in choice.message.tool_calls {
        // Arguments arrive as a JSON-encoded string
        let input: HashMap<String, serde_json::Value> =
            serde_json::from_str(&call.function.arguments).map_err(|e| {
                GatewayError::MalformedResponse(format!(
                    "tool call arguments are not a JSON object: {}",
                    e
                ))
            })?;
        content.push(ContentBlock::ToolUse {
            id: call.id,
            name: call.function.name,
            input,
        });
    }

    let stop_reason = choice.finish_reason.map(|reason| match reason.as_str() {
        "stop" => StopReason::EndTurn,
        "tool_calls" => StopReason::ToolUse,
        "length" => StopReason::MaxTokens,
        other => StopReason::Other(other.to_string()),
    });

    Ok(LlmResponse {
        content,
        stop_reason,
        model: body.model,
    })
}

// ==================== Wire types ====================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    model: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ApiToolCall>,
}

#[derive(Deserialize)]
struct ApiToolCall {
    id: String,
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> ChatResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn converts_text_only_reply() {
        let body = parse(serde_json::json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "content": "BridgeDB maps identifiers." },
                "finish_reason": "stop"
            }]
        }));
        let response = convert_response(body).unwrap();
        assert_eq!(response.text_content(), "BridgeDB maps identifiers.");
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn converts_tool_call_reply() {
        let body = parse(serde_json::json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "map_identifier",
                            "arguments": "{\"identifier\": \"ENSG00000139618\", \"source\": \"En\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }));
        let response = convert_response(body).unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "map_identifier");
        assert_eq!(calls[0].get_string("identifier"), Some("ENSG00000139618"));
        assert_eq!(calls[0].native_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn bad_tool_arguments_are_a_malformed_response() {
        let body = parse(serde_json::json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "id": "call_1",
                        "function": { "name": "map_identifier", "arguments": "not json" }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }));
        assert!(matches!(
            convert_response(body),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_choices_are_a_malformed_response() {
        let body = parse(serde_json::json!({ "choices": [] }));
        assert!(matches!(
            convert_response(body),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn wraps_neutral_schema_in_function_envelope() {
        let neutral = serde_json::json!({
            "name": "map_identifier",
            "description": "Map an identifier",
            "input_schema": { "type": "object", "properties": {}, "required": [] }
        });
        let wrapped = to_function_tool(&neutral);
        assert_eq!(wrapped["type"], "function");
        assert_eq!(wrapped["function"]["name"], "map_identifier");
        assert_eq!(wrapped["function"]["parameters"]["type"], "object");
    }
}
