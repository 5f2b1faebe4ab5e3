// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Opaque handle identifiers and the generators that produce them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{HandleFormat, ServerConfig};

/// Opaque token standing in for a live object across the RPC boundary.
///
/// Only equality is meaningful; the textual shape depends on the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the handle, returning the identifier string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Handle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Handle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Source of candidate identifiers for the handle pool.
///
/// Generators must never block. They are collision-resistant, not
/// collision-free: the pool checks every candidate and asks again on a clash.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send {
    /// Produces the next candidate identifier.
    fn generate(&mut self) -> Handle;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> Handle {
        Handle(Uuid::new_v4().to_string())
    }
}

/// Prefixed counter identifiers (`h-1`, `h-2`, ...).
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    /// Creates a generator whose first identifier is `<prefix>-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn generate(&mut self) -> Handle {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next = self.next.wrapping_add(1);
        Handle(id)
    }
}

/// Builds the generator selected by the server configuration.
pub fn generator_for(config: &ServerConfig) -> Box<dyn IdGenerator> {
    match config.handle_format {
        HandleFormat::Uuid => Box::new(UuidGenerator),
        HandleFormat::Sequential => Box::new(SequentialGenerator::new(&config.handle_prefix)),
    }
}
