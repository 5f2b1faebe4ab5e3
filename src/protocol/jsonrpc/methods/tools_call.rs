// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the "tools/call" method handler.
//!
//! Only malformed params are protocol errors. Everything that goes wrong once
//! a call is well formed (unknown tool, bad arguments, a failing handler) is
//! reported inside the result with `isError: true`, so the client always gets
//! a `result` for a well-formed call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{to_result, MethodResult};
use crate::error::tool::ToolError;
use crate::pool::HandlePool;
use crate::protocol::jsonrpc::validation::{validate_arguments, validate_call_params};
use crate::tools::ToolRegistry;

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    /// Content type, always `"text"`
    #[serde(rename = "type")]
    pub content_type: String,

    /// JSON text of the value a successful call produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Failure description of an unsuccessful call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of the tools/call method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    /// Content blocks; always exactly one
    pub content: Vec<ToolContent>,

    /// Set when the call failed
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl CallToolResult {
    /// Wraps the value a tool returned.
    pub fn success(value: &Value) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: Some(value.to_string()),
                message: None,
            }],
            is_error: false,
        }
    }

    /// Wraps a tool failure.
    pub fn failure(error: &ToolError) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: None,
                message: Some(error.to_string()),
            }],
            is_error: true,
        }
    }
}

/// Handles the tools/call method call.
///
/// With `strict_arguments` set, arguments are checked against the tool's input
/// schema before the handler runs.
pub fn handle_tools_call(
    request: &Value,
    params: Option<&Value>,
    registry: &ToolRegistry,
    pool: &mut HandlePool,
    strict_arguments: bool,
) -> MethodResult {
    let call = validate_call_params(request, params)?;

    let outcome = match registry.lookup(&call.name) {
        None => Err(ToolError::UnknownTool(call.name.clone())),
        Some(tool) => {
            let checked = if strict_arguments {
                validate_arguments(tool.input_schema(), &call.arguments)
            } else {
                Ok(())
            };
            checked.and_then(|()| tool.invoke(pool, &call.arguments))
        }
    };

    match outcome {
        Ok(output) => {
            let value = output.into_value();
            debug!(tool = %call.name, result = %value, "Tool call succeeded");
            to_result(&CallToolResult::success(&value))
        }
        Err(e) => {
            warn!(tool = %call.name, error = %e, "Tool call failed");
            to_result(&CallToolResult::failure(&e))
        }
    }
}
