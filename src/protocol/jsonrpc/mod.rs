// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 protocol handler for the Kapili MCP Server.
//!
//! This module implements the [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification)
//! subset an MCP tool server needs: single requests in, exactly one response
//! out, in order. Batch requests are not supported.
//!
//! # Features
//!
//! - Lenient decoding so that malformed requests are still answered with their id
//! - Standard error codes with tagged messages
//! - `initialize`, `tools/list` and `tools/call`; anything else is `MethodNotFound`
//! - Tool failures reported in-band, never as protocol errors
//!
//! # Example
//!
//! ```
//! use kapili_mcp_lib::config::KapiliConfig;
//! use kapili_mcp_lib::protocol::jsonrpc::create_dispatcher;
//!
//! let mut dispatcher = create_dispatcher(&KapiliConfig::default()).unwrap();
//!
//! let response = dispatcher.handle_line(br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);
//! assert!(response.starts_with(r#"{"jsonrpc":"2.0","result":{"tools":[{"#));
//! assert!(response.ends_with(r#""id":1}"#));
//!
//! let response = dispatcher.handle_line(br#"{"id":2,"method":"ping"}"#);
//! assert_eq!(
//!     response,
//!     r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"METHOD_NOT_FOUND: {\"id\":2,\"method\":\"ping\"}"},"id":2}"#
//! );
//! ```

pub mod dispatcher;
pub mod error;
pub mod methods;
pub mod setup;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-exports
pub use dispatcher::Dispatcher;
pub use error::{ErrorCode, JsonRpcError};
pub use methods::MethodResult;
pub use setup::{create_dispatcher, register_standard_tools};
pub use types::{Id, Response, JSONRPC_VERSION};
pub use validation::{validate_arguments, validate_call_params, validate_envelope, CallParams, Envelope};
