//! Handle pool error module.
//!
//! Failures raised when resolving, inserting or releasing pool entries.

use thiserror::Error;

use crate::pool::Handle;

/// Errors that can occur during handle pool operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The handle was never issued by this pool, or has been released.
    #[error("Unknown handle: {0}")]
    UnknownHandle(Handle),

    /// The handle refers to an object of a different type than requested.
    #[error("Handle {handle} refers to a {actual}, expected a {expected}")]
    TypeMismatch {
        /// The handle that was resolved
        handle: Handle,
        /// The type the caller asked for
        expected: &'static str,
        /// The type stored under the handle
        actual: &'static str,
    },

    /// The pool reached its configured capacity.
    #[error("Handle pool is full ({0} live handles)")]
    PoolExhausted(usize),
}
