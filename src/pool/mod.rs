// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Handle indirection for the Kapili MCP Server.
//!
//! Clients never see live objects. Every object an operation produces is parked
//! in a [`HandlePool`] and the client receives an opaque [`Handle`] it can pass
//! back in later calls.
//!
//! # Example
//!
//! ```
//! use kapili_mcp_lib::pool::{Handle, HandlePool};
//! use kapili_mcp_lib::error::pool::PoolError;
//!
//! let mut pool = HandlePool::new();
//! let handle = pool.insert(String::from("live object")).unwrap();
//! assert_eq!(pool.get::<String>(&handle).unwrap(), "live object");
//!
//! let stale = Handle::new("not-issued");
//! assert_eq!(pool.get::<String>(&stale), Err(PoolError::UnknownHandle(stale.clone())));
//! ```

pub mod handle_pool;
pub mod id;

use crate::config::KapiliConfig;

pub use handle_pool::{HandlePool, PoolResult};
pub use id::{generator_for, Handle, IdGenerator, SequentialGenerator, UuidGenerator};

impl HandlePool {
    /// Creates an empty pool with the generator and capacity from `config`.
    pub fn from_config(config: &KapiliConfig) -> Self {
        HandlePool::with_generator(generator_for(&config.server))
            .with_max_handles(config.limits.max_handles)
    }
}
