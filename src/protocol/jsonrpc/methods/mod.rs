// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 method handlers.
//!
//! Each handler turns the params of one method into a `result` value, or a
//! protocol error when the params are unusable.

use serde::Serialize;
use serde_json::Value;

use super::error::JsonRpcError;

pub mod initialize;
pub mod tools_call;
pub mod tools_list;

// Re-exports
pub use initialize::handle_initialize;
pub use tools_call::handle_tools_call;
pub use tools_list::handle_tools_list;

/// Result of a method handler: the `result` member or the `error` member.
pub type MethodResult = Result<Value, JsonRpcError>;

/// Serializes a typed method result.
pub(crate) fn to_result<T: Serialize>(result: &T) -> MethodResult {
    serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
