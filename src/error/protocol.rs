//! Protocol error module.
//!
//! This module defines error types that may occur while setting up the MCP
//! protocol engine, such as building the tool registry.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A tool with the same name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A tool name is empty or otherwise unusable.
    #[error("Invalid tool name: {0:?}")]
    InvalidToolName(String),
}
