// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error objects for the JSON-RPC 2.0 protocol handler.
//!
//! This module defines error codes and the wire error object according to the
//! [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification#error_object).
//! Messages carry an upper-case tag naming the failure followed by detail, e.g.
//! `METHOD_NOT_FOUND: {"method":"nope"}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard JSON-RPC 2.0 error codes used by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parse error (-32700)
    /// Invalid JSON was received by the server.
    ParseError = -32700,

    /// Invalid Request (-32600)
    /// The JSON sent is not a valid Request object.
    InvalidRequest = -32600,

    /// Method not found (-32601)
    /// The method does not exist / is not available.
    MethodNotFound = -32601,

    /// Invalid params (-32602)
    /// Invalid method parameter(s).
    InvalidParams = -32602,

    /// Internal error (-32603)
    /// Internal JSON-RPC error.
    InternalError = -32603,
}

impl ErrorCode {
    /// Returns a string description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// The tag prefixed to error messages with this code.
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::MethodNotFound => "METHOD_NOT_FOUND",
            ErrorCode::InvalidParams => "INVALID_PARAMS",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Create an ErrorCode from a raw integer value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -32700 => Some(ErrorCode::ParseError),
            -32600 => Some(ErrorCode::InvalidRequest),
            -32601 => Some(ErrorCode::MethodNotFound),
            -32602 => Some(ErrorCode::InvalidParams),
            -32603 => Some(ErrorCode::InternalError),
            _ => None,
        }
    }

    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

/// JSON-RPC error object as defined in the specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,

    /// Additional information about the error; never populated by this server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Creates a new JSON-RPC error with the code's tag and `detail`.
    pub fn new(code: ErrorCode, detail: impl AsRef<str>) -> Self {
        Self {
            code: code.code(),
            message: format!("{}: {}", code.tag(), detail.as_ref()),
            data: None,
        }
    }

    /// Returns the typed code, if it is one of the standard codes.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }

    /// The line could not be decoded as JSON.
    pub fn parse_error(cause: &serde_json::Error) -> Self {
        Self::new(ErrorCode::ParseError, cause.to_string())
    }

    /// The decoded value is not a request object.
    pub fn invalid_request(request: &Value) -> Self {
        Self::new(ErrorCode::InvalidRequest, request.to_string())
    }

    /// The line exceeded the configured length limit.
    pub fn oversized_request(limit: usize) -> Self {
        Self::new(
            ErrorCode::InvalidRequest,
            format!("request exceeds the {limit} byte limit"),
        )
    }

    /// The method is not served.
    pub fn method_not_found(request: &Value) -> Self {
        Self::new(ErrorCode::MethodNotFound, request.to_string())
    }

    /// The params of a known method are malformed.
    pub fn invalid_params(request: &Value) -> Self {
        Self::new(ErrorCode::InvalidParams, request.to_string())
    }

    /// The response could not be produced.
    pub fn internal_error(detail: impl AsRef<str>) -> Self {
        Self::new(ErrorCode::InternalError, detail)
    }
}
