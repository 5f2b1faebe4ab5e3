// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Types for the JSON-RPC 2.0 protocol.
//!
//! Requests are decoded leniently as a `serde_json::Value` first (see
//! [`validation`](super::validation)), so only the outgoing side has a typed
//! envelope here.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use tracing::error;

use super::error::JsonRpcError;

/// JSON-RPC protocol version written on every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Encoded response used when a response cannot be serialized.
pub(crate) const ENCODING_FAILURE_RESPONSE: &str = r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"INTERNAL_ERROR: response could not be encoded"},"id":""}"#;

/// JSON-RPC request identifier as echoed on a response.
///
/// Numbers keep their exact JSON representation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),

    /// Numeric identifier
    Number(Number),
}

impl Id {
    /// The id used when the request carried no usable one: the empty string.
    pub fn placeholder() -> Self {
        Id::String(String::new())
    }

    /// Converts a raw `id` member. Anything but a string or number yields the
    /// placeholder.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Id::String(s.clone()),
            Some(Value::Number(n)) => Id::Number(n.clone()),
            _ => Id::placeholder(),
        }
    }

    /// Recovers the id from a decoded request, whatever else is wrong with it.
    pub fn recover(request: &Value) -> Self {
        Self::from_value(request.get("id"))
    }
}

impl Default for Id {
    fn default() -> Self {
        Id::placeholder()
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n.into())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "{}", s),
            Id::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A JSON-RPC 2.0 response object.
///
/// This type represents a response to a JSON-RPC request. It contains either a result or an error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Response {
    /// JSON-RPC protocol version, always "2.0"
    pub jsonrpc: String,

    /// The result of the method invocation, if successful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// The error object, if an error occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Same identifier as the request this is responding to
    pub id: Id,
}

impl Response {
    /// Creates a new successful JSON-RPC 2.0 response.
    pub fn success(id: Id, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Creates a new error JSON-RPC 2.0 response.
    pub fn error(id: Id, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Returns true if this response contains a successful result.
    pub fn is_success(&self) -> bool {
        self.result.is_some() && self.error.is_none()
    }

    /// Returns true if this response contains an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Encodes the response as a single line of JSON (no trailing newline).
    ///
    /// Encoding never fails: if serialization does, a fixed `InternalError`
    /// response is returned instead.
    pub fn encode(&self) -> String {
        match serde_json::to_string(self) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(error = %e, id = %self.id, "Failed to encode response");
                ENCODING_FAILURE_RESPONSE.to_string()
            }
        }
    }
}
