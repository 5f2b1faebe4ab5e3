//! Kapili MCP Server Library
//!
//! This library contains the core components of the Kapili MCP Server: the
//! handle pool, the tool registry, the JSON-RPC dispatcher and the line
//! transport, plus the bundled spreadsheet automation surface. The library is
//! designed to be used by the binary crate, but can also be used to embed the
//! dispatcher with a different set of tools.
//!
//! # Architecture
//!
//! One request line flows through the components in a single direction:
//! transport → decode → dispatcher → (validator → registry → handle pool) →
//! dispatcher → encode → transport. Everything runs on a single task; the
//! dispatcher owns all mutable state.

// Re-export public modules
pub mod automation;
pub mod config;
pub mod error;
pub mod logging;
pub mod pool;
pub mod protocol;
pub mod tools;
pub mod transport;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Kapili MCP Server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
