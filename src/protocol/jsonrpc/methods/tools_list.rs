// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the "tools/list" method handler.
//!
//! The listing is derived from the registry on every call. Input schemas are
//! reported exactly as they were registered.

use serde::Serialize;
use serde_json::Value;

use super::{to_result, MethodResult};
use crate::tools::{ToolDescriptor, ToolRegistry};

/// One entry of the tools/list result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition<'a> {
    /// Tool name
    pub name: &'a str,

    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,

    /// JSON Schema for the tool arguments
    pub input_schema: &'a Value,
}

impl<'a> From<&'a ToolDescriptor> for ToolDefinition<'a> {
    fn from(descriptor: &'a ToolDescriptor) -> Self {
        Self {
            name: descriptor.name(),
            description: descriptor.description(),
            input_schema: descriptor.input_schema(),
        }
    }
}

/// Response for the tools/list method.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsListResult<'a> {
    /// Registered tools, in registration order
    pub tools: Vec<ToolDefinition<'a>>,
}

/// Handles the tools/list method call. Params are ignored.
pub fn handle_tools_list(registry: &ToolRegistry) -> MethodResult {
    to_result(&ToolsListResult {
        tools: registry.descriptors().map(ToolDefinition::from).collect(),
    })
}
