// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request validation utilities for the JSON-RPC 2.0 handler.
//!
//! Every function here is a pure check over an already decoded value. The
//! envelope check is deliberately lenient: only the shape the dispatcher
//! actually reads (`method`, and `params` for `tools/call`) is enforced.

use serde_json::{Map, Value};

use super::error::JsonRpcError;
use super::types::Id;
use crate::error::tool::ToolError;
use crate::tools::{ParamType, ToolArguments};

/// The parts of a request the dispatcher routes on.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<'a> {
    /// The id to echo
    pub id: Id,
    /// Method name
    pub method: &'a str,
    /// Raw `params` member, if present
    pub params: Option<&'a Value>,
}

/// Validated `tools/call` params.
#[derive(Debug, Clone, PartialEq)]
pub struct CallParams {
    /// Name of the tool to invoke
    pub name: String,
    /// Named arguments, empty when none were sent
    pub arguments: ToolArguments,
}

/// Checks that `request` is an object with a string `method`.
///
/// The `jsonrpc` member is not inspected. On failure the returned error is an
/// `InvalidRequest` quoting the request.
pub fn validate_envelope(request: &Value) -> Result<Envelope<'_>, JsonRpcError> {
    let object = request
        .as_object()
        .ok_or_else(|| JsonRpcError::invalid_request(request))?;
    let method = object
        .get("method")
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_request(request))?;

    Ok(Envelope {
        id: Id::from_value(object.get("id")),
        method,
        params: object.get("params"),
    })
}

/// Checks the params of a `tools/call` request.
///
/// `params` must be an object with a string `name`. `arguments` may be absent
/// or `null` (treated as `{}`); otherwise it must be an object.
pub fn validate_call_params(
    request: &Value,
    params: Option<&Value>,
) -> Result<CallParams, JsonRpcError> {
    let invalid = || JsonRpcError::invalid_params(request);

    let params = params.and_then(Value::as_object).ok_or_else(invalid)?;
    let name = params.get("name").and_then(Value::as_str).ok_or_else(invalid)?;
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(invalid()),
    };

    Ok(CallParams {
        name: name.to_string(),
        arguments: ToolArguments::new(arguments),
    })
}

/// Checks `arguments` against a flat object schema.
///
/// Every name in `required` must be present, and every present argument
/// declared in `properties` with a primitive `type` must match it. Other
/// schema keywords are ignored.
pub fn validate_arguments(schema: &Value, arguments: &ToolArguments) -> Result<(), ToolError> {
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if arguments.get(name).is_none() {
                return Err(ToolError::invalid_argument(name, "missing required argument"));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, value) in arguments.as_map() {
            let declared = properties
                .get(name)
                .and_then(|property| property.get("type"))
                .and_then(Value::as_str)
                .and_then(ParamType::from_keyword);
            if let Some(param_type) = declared {
                if !param_type.matches(value) {
                    return Err(ToolError::invalid_argument(
                        name,
                        format!("expected {}", param_type.as_str()),
                    ));
                }
            }
        }
    }

    Ok(())
}
