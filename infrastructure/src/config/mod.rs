//! Configuration loading and raw TOML data types

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigError, FileAnthropicConfig, FileBridgeDbConfig, FileConfig, FileLoggingConfig,
    FileOpenAiConfig, FileProvidersConfig, FileQueryConfig,
};
pub use loader::ConfigLoader;
