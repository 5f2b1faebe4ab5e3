//! Server configuration module.
//!
//! Identity reported by `initialize` and the shape of the handles the pool
//! hands out.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// MCP protocol revision announced by default.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// How the handle pool generates identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandleFormat {
    /// Random UUID v4 strings
    #[default]
    Uuid,
    /// Prefixed counter, deterministic across runs
    Sequential,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Name reported in `serverInfo`
    pub name: String,

    /// Version reported in `serverInfo`
    pub version: String,

    /// Protocol revision reported by `initialize`
    pub protocol_version: String,

    /// Identifier format used by the handle pool
    pub handle_format: HandleFormat,

    /// Prefix used by the sequential identifier format
    pub handle_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "kapili-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            handle_format: HandleFormat::default(),
            handle_prefix: "h".to_string(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if self.version.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server version cannot be empty".to_string(),
            ));
        }

        if self.protocol_version.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "protocol_version cannot be empty".to_string(),
            ));
        }

        if self.handle_format == HandleFormat::Sequential && self.handle_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "handle_prefix is required for sequential handles".to_string(),
            ));
        }

        Ok(())
    }
}
