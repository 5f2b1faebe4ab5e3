//! Protocol module for the Kapili MCP Server.
//!
//! This module implements the MCP protocol surface: JSON-RPC 2.0 framing,
//! request validation, and the `initialize`, `tools/list` and `tools/call`
//! methods.

pub mod jsonrpc;
