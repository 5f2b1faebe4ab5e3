//! Transport error module.
//!
//! This module defines error types that may occur in the line-delimited stdio
//! transport.

use std::io;
use thiserror::Error;

/// Errors that can occur during transport operations.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error when reading from the input stream.
    #[error("Input read error: {0}")]
    Read(#[source] io::Error),

    /// Error when writing to the output stream.
    #[error("Output write error: {0}")]
    Write(#[source] io::Error),
}
