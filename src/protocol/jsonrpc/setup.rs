// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Setup and initialization utilities for the dispatcher.
//!
//! This module fills the tool registry and builds the dispatcher used by the
//! Kapili MCP server.

use tracing::info;

use super::dispatcher::Dispatcher;
use crate::automation::register_automation_tools;
use crate::config::KapiliConfig;
use crate::error::protocol::ProtocolError;
use crate::pool::HandlePool;
use crate::tools::{register_builtin_tools, ToolRegistry};

/// Registers every tool the server offers.
///
/// This function should be called once during server initialization; the
/// registry is frozen once handed to the dispatcher.
pub fn register_standard_tools(registry: &mut ToolRegistry) -> Result<(), ProtocolError> {
    register_builtin_tools(registry)?;
    register_automation_tools(registry)?;
    Ok(())
}

/// Creates a fully configured dispatcher with all standard tools and an empty
/// handle pool.
pub fn create_dispatcher(config: &KapiliConfig) -> Result<Dispatcher, ProtocolError> {
    let mut registry = ToolRegistry::new();
    register_standard_tools(&mut registry)?;
    info!(
        tools = registry.len(),
        handle_format = ?config.server.handle_format,
        "Dispatcher ready"
    );

    let pool = HandlePool::from_config(config);
    Ok(Dispatcher::new(registry, pool, config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::jsonrpc::types::{Id, Response};
    use crate::tools::builtin::{HANDLE_DESCRIBE, HANDLE_RELEASE};
    use serde_json::json;

    #[test]
    fn test_standard_tools_registered() {
        let dispatcher = create_dispatcher(&KapiliConfig::default()).unwrap();
        let registry = dispatcher.registry();

        assert_eq!(registry.len(), 16);
        assert!(registry.lookup(HANDLE_RELEASE).is_some());
        assert!(registry.lookup(HANDLE_DESCRIBE).is_some());
        assert!(registry.lookup("create_object").is_some());
        assert!(registry.lookup("range_get_value").is_some());
        assert!(dispatcher.pool().is_empty());
    }

    #[test]
    fn test_initialize_method_registered() {
        let mut dispatcher = create_dispatcher(&KapiliConfig::default()).unwrap();
        let line = json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize" }).to_string();

        let response: Response =
            serde_json::from_str(&dispatcher.handle_line(line.as_bytes())).unwrap();

        assert!(response.error.is_none());
        assert_eq!(response.id, Id::from(1));
        assert!(response.result.unwrap()["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_tools_list_method_registered() {
        let mut dispatcher = create_dispatcher(&KapiliConfig::default()).unwrap();
        let line = json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }).to_string();

        let response: Response =
            serde_json::from_str(&dispatcher.handle_line(line.as_bytes())).unwrap();

        let tools = response.result.unwrap()["tools"].as_array().cloned().unwrap();
        assert_eq!(tools.len(), 16);
        assert_eq!(tools[0]["name"], json!(HANDLE_RELEASE));
    }
}
