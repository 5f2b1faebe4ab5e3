// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tool registration for the Kapili MCP Server.
//!
//! A tool is a named operation with a JSON Schema for its arguments and a
//! handler that works on objects held in the [`HandlePool`](crate::pool::HandlePool).
//! Handlers return a [`ToolResult`]; failures are data, not protocol errors.
//!
//! # Example
//!
//! ```
//! use kapili_mcp_lib::pool::HandlePool;
//! use kapili_mcp_lib::tools::{InputSchema, ParamType, ToolArguments, ToolDescriptor, ToolRegistry};
//! use serde_json::json;
//!
//! let mut registry = ToolRegistry::new();
//! registry
//!     .register(ToolDescriptor::new(
//!         "string_new",
//!         InputSchema::object().required("text", ParamType::String),
//!         |pool: &mut HandlePool, args: &ToolArguments| {
//!             let text = args.str("text")?.to_string();
//!             Ok(pool.insert(text)?.into())
//!         },
//!     ))
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! ```

pub mod arguments;
pub mod builtin;
pub mod registry;
pub mod schema;

pub use arguments::ToolArguments;
pub use builtin::register_builtin_tools;
pub use registry::{ToolDescriptor, ToolHandler, ToolOutput, ToolRegistry, ToolResult};
pub use schema::{InputSchema, ParamType};
