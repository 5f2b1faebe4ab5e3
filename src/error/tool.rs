//! Tool error module.
//!
//! Failures raised while a registered tool runs. These never become protocol
//! errors: the dispatcher reports them inside a `tools/call` result with
//! `isError: true`.

use thiserror::Error;

use super::pool::PoolError;

/// Errors that a tool handler can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A handle argument could not be resolved.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// An argument is missing or has the wrong type.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The operation itself failed.
    #[error("{0}")]
    Operation(String),
}

impl ToolError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
