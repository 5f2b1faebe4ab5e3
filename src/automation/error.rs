// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the spreadsheet automation surface.

use crate::error::tool::ToolError;

/// Error types for automation object operations
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AutomationError {
    /// No class is registered under the ProgID
    #[error("Unknown ProgID: {0}")]
    UnknownProgId(String),

    /// The owning application has quit
    #[error("The application has quit")]
    ApplicationQuit,

    /// Collection index outside `1..=count`
    #[error("{collection} index {index} is out of range (count is {count})")]
    IndexOutOfRange {
        /// Collection being indexed
        collection: &'static str,
        /// Requested 1-based index
        index: i64,
        /// Number of items in the collection
        count: usize,
    },

    /// Cell coordinates outside the sheet
    #[error("Cell ({row}, {column}) is outside the worksheet")]
    InvalidCell {
        /// Requested 1-based row
        row: i64,
        /// Requested 1-based column
        column: i64,
    },
}

/// Result type for automation operations
pub type Result<T> = std::result::Result<T, AutomationError>;

impl From<AutomationError> for ToolError {
    fn from(error: AutomationError) -> Self {
        ToolError::Operation(error.to_string())
    }
}
