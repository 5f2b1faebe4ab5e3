// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the "initialize" method handler.
//!
//! The initialize method is typically the first method called by a client to
//! learn the protocol version and capabilities of the server. Client params are
//! read for logging only; the result never depends on them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{to_result, MethodResult};
use crate::config::server::ServerConfig;

/// Client identification sent with initialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    /// The client's name
    #[serde(default)]
    pub name: String,

    /// The client's version
    #[serde(default)]
    pub version: String,
}

/// Request parameters for the initialize method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version the client speaks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,

    /// Client identification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
}

/// Marker for the tools capability. Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsCapability {}

/// Server capabilities communicated in the initialize response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// The server offers tools
    pub tools: ToolsCapability,
}

/// Server identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,

    /// Server version
    pub version: String,
}

/// Initialize response from server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Protocol version the server speaks
    pub protocol_version: String,

    /// Server capabilities
    pub capabilities: ServerCapabilities,

    /// Server identification
    pub server_info: ServerInfo,
}

/// Handles the initialize method call.
pub fn handle_initialize(params: Option<&Value>, server: &ServerConfig) -> MethodResult {
    match params.map(|params| serde_json::from_value::<InitializeParams>(params.clone())) {
        Some(Ok(InitializeParams {
            protocol_version,
            client_info,
        })) => {
            let client = client_info.unwrap_or_default();
            info!(
                client_name = %client.name,
                client_version = %client.version,
                requested_protocol = protocol_version.as_deref().unwrap_or(""),
                "Client initializing"
            );
        }
        Some(Err(e)) => debug!(error = %e, "Ignoring unreadable initialize params"),
        None => {}
    }

    to_result(&InitializeResult {
        protocol_version: server.protocol_version.clone(),
        capabilities: ServerCapabilities::default(),
        server_info: ServerInfo {
            name: server.name.clone(),
            version: server.version.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_result_shape() {
        let server = ServerConfig::default();
        let result = handle_initialize(None, &server).unwrap();

        assert_eq!(
            result,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": { "tools": {} },
                "serverInfo": { "name": server.name, "version": server.version }
            })
        );
    }

    #[test]
    fn test_initialize_ignores_params() {
        let server = ServerConfig::default();
        let expected = handle_initialize(None, &server).unwrap();

        let full = json!({
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0.0" }
        });
        assert_eq!(handle_initialize(Some(&full), &server).unwrap(), expected);

        let garbage = json!([1, 2, 3]);
        assert_eq!(handle_initialize(Some(&garbage), &server).unwrap(), expected);
    }

    #[test]
    fn test_initialize_uses_configured_identity() {
        let server = ServerConfig {
            name: "custom".to_string(),
            protocol_version: "2025-03-26".to_string(),
            ..ServerConfig::default()
        };
        let result = handle_initialize(None, &server).unwrap();
        assert_eq!(result["serverInfo"]["name"], json!("custom"));
        assert_eq!(result["protocolVersion"], json!("2025-03-26"));
    }
}
