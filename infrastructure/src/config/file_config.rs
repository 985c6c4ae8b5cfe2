//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field is optional; defaults match the public services.

use crate::providers::{ProviderKind, ProviderSettings};
use bridgechat_domain::Model;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while resolving the loaded configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown provider {0:?} (expected \"openai\" or \"anthropic\")")]
    UnknownProvider(String),

    #[error("No API key for provider {provider}: set the {env} environment variable or provider.{provider}.api_key")]
    MissingApiKey { provider: ProviderKind, env: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion settings (model, sampling)
    pub query: FileQueryConfig,
    /// Provider credentials and endpoints
    pub provider: FileProvidersConfig,
    /// BridgeDB / PubChem endpoints
    pub bridgedb: FileBridgeDbConfig,
    /// Conversation transcript logging
    pub logging: FileLoggingConfig,
}

/// Completion settings (`[query]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// Model to complete with.
    pub model: String,
    /// Sampling temperature. Zero keeps lookups deterministic.
    pub temperature: f32,
    /// Token cap per completion.
    pub max_tokens: u32,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            max_tokens: 1024,
        }
    }
}

/// Provider configuration (`[provider]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Provider serving the completions: "openai" or "anthropic".
    /// When unset, the provider is inferred from the model family.
    pub default: Option<String>,
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

/// OpenAI-compatible provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL (can be overridden for Azure OpenAI or local gateways).
    pub base_url: String,
    /// Request deadline for the completion call, in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Request deadline for the completion call, in seconds.
    pub timeout_secs: u64,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 30,
        }
    }
}

/// BridgeDB endpoint configuration (`[bridgedb]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBridgeDbConfig {
    /// Base URL of the BridgeDB webservice.
    pub base_url: String,
    /// Base URL of the PubChem PUG REST service.
    pub pubchem_base_url: String,
    /// Request deadline per lookup, in seconds.
    pub timeout_secs: u64,
}

impl Default for FileBridgeDbConfig {
    fn default() -> Self {
        Self {
            base_url: crate::bridgedb::DEFAULT_BASE_URL.to_string(),
            pubchem_base_url: crate::bridgedb::DEFAULT_PUBCHEM_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Logging configuration (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL conversation transcript. Unset disables it.
    pub conversation_file: Option<PathBuf>,
}

impl FileConfig {
    /// Decide which provider serves the configured model.
    pub fn provider_kind(&self, model: &Model) -> Result<ProviderKind, ConfigError> {
        if let Some(name) = &self.provider.default {
            return ProviderKind::parse(name)
                .ok_or_else(|| ConfigError::UnknownProvider(name.clone()));
        }
        if model.is_claude() {
            Ok(ProviderKind::Anthropic)
        } else {
            Ok(ProviderKind::OpenAi)
        }
    }

    /// Resolve everything the provider adapter needs, including the API key
    /// from config or environment. Resolution happens once at startup.
    pub fn provider_settings(&self, kind: ProviderKind) -> Result<ProviderSettings, ConfigError> {
        match kind {
            ProviderKind::OpenAi => {
                let c = &self.provider.openai;
                Ok(ProviderSettings {
                    kind,
                    api_key: resolve_api_key(kind, c.api_key.as_deref(), &c.api_key_env)?,
                    base_url: c.base_url.clone(),
                    api_version: None,
                    temperature: self.query.temperature,
                    max_tokens: self.query.max_tokens,
                    timeout: Duration::from_secs(c.timeout_secs),
                })
            }
            ProviderKind::Anthropic => {
                let c = &self.provider.anthropic;
                Ok(ProviderSettings {
                    kind,
                    api_key: resolve_api_key(kind, c.api_key.as_deref(), &c.api_key_env)?,
                    base_url: c.base_url.clone(),
                    api_version: Some(c.api_version.clone()),
                    temperature: self.query.temperature,
                    max_tokens: self.query.max_tokens,
                    timeout: Duration::from_secs(c.timeout_secs),
                })
            }
        }
    }
}

fn resolve_api_key(
    provider: ProviderKind,
    explicit: Option<&str>,
    env_name: &str,
) -> Result<String, ConfigError> {
    if let Some(key) = explicit
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }
    match std::env::var(env_name) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey {
            provider,
            env: env_name.to_string(),
        }),
    }
}
