// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The handle pool: the single owner of every object exposed to clients.
//!
//! The pool is heterogeneous. Each entry keeps the boxed object together with a
//! type tag so that a handle resolved as the wrong kind of object fails with
//! [`PoolError::TypeMismatch`] instead of being misused.

use std::any::{type_name, Any};
use std::fmt;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use super::id::{IdGenerator, UuidGenerator};
use super::Handle;
use crate::error::pool::PoolError;

/// Result type for handle pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

struct PoolEntry {
    type_name: &'static str,
    value: Box<dyn Any + Send>,
}

/// Mapping from [`Handle`] to live objects of arbitrary types.
///
/// Entries stay alive until [`HandlePool::release`] is called or the pool is
/// dropped. Identifiers are never reissued by the same pool, even after release.
pub struct HandlePool {
    entries: HashMap<Handle, PoolEntry>,
    issued: HashSet<Handle>,
    generator: Box<dyn IdGenerator>,
    max_handles: usize,
}

impl HandlePool {
    /// Creates an empty pool that hands out UUID identifiers.
    pub fn new() -> Self {
        Self::with_generator(Box::new(UuidGenerator))
    }

    /// Creates an empty pool drawing identifiers from `generator`.
    pub fn with_generator(generator: Box<dyn IdGenerator>) -> Self {
        Self {
            entries: HashMap::new(),
            issued: HashSet::new(),
            generator,
            max_handles: 0,
        }
    }

    /// Caps the number of live handles; `0` disables the cap.
    pub fn with_max_handles(mut self, max_handles: usize) -> Self {
        self.max_handles = max_handles;
        self
    }

    /// Stores `value` and returns the freshly minted handle for it.
    ///
    /// Candidate identifiers that were issued before are discarded and the
    /// generator is asked again.
    pub fn insert<T: Any + Send>(&mut self, value: T) -> PoolResult<Handle> {
        if self.max_handles > 0 && self.entries.len() >= self.max_handles {
            return Err(PoolError::PoolExhausted(self.entries.len()));
        }

        let mut handle = self.generator.generate();
        while self.issued.contains(&handle) {
            debug!(%handle, "identifier collision, regenerating");
            handle = self.generator.generate();
        }

        let type_name = short_type_name::<T>();
        trace!(%handle, type_name, "inserting pool entry");
        self.issued.insert(handle.clone());
        self.entries.insert(
            handle.clone(),
            PoolEntry {
                type_name,
                value: Box::new(value),
            },
        );
        Ok(handle)
    }

    /// Resolves `handle` to a shared reference of type `T`.
    pub fn get<T: Any>(&self, handle: &Handle) -> PoolResult<&T> {
        let entry = self
            .entries
            .get(handle)
            .ok_or_else(|| PoolError::UnknownHandle(handle.clone()))?;
        let actual = entry.type_name;
        entry
            .value
            .downcast_ref::<T>()
            .ok_or_else(|| PoolError::TypeMismatch {
                handle: handle.clone(),
                expected: short_type_name::<T>(),
                actual,
            })
    }

    /// Resolves `handle` to a mutable reference of type `T`.
    pub fn get_mut<T: Any>(&mut self, handle: &Handle) -> PoolResult<&mut T> {
        let entry = self
            .entries
            .get_mut(handle)
            .ok_or_else(|| PoolError::UnknownHandle(handle.clone()))?;
        let actual = entry.type_name;
        entry
            .value
            .downcast_mut::<T>()
            .ok_or_else(|| PoolError::TypeMismatch {
                handle: handle.clone(),
                expected: short_type_name::<T>(),
                actual,
            })
    }

    /// Returns the type tag recorded for `handle`.
    pub fn type_name(&self, handle: &Handle) -> PoolResult<&'static str> {
        self.entries
            .get(handle)
            .map(|entry| entry.type_name)
            .ok_or_else(|| PoolError::UnknownHandle(handle.clone()))
    }

    /// Drops the object behind `handle`. The handle is unknown afterwards.
    pub fn release(&mut self, handle: &Handle) -> PoolResult<()> {
        match self.entries.remove(handle) {
            Some(entry) => {
                debug!(%handle, type_name = entry.type_name, "released pool entry");
                Ok(())
            }
            None => Err(PoolError::UnknownHandle(handle.clone())),
        }
    }

    /// Returns true if `handle` currently resolves to an object.
    pub fn contains(&self, handle: &Handle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no handle is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HandlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlePool")
            .field("live", &self.entries.len())
            .field("issued", &self.issued.len())
            .field("max_handles", &self.max_handles)
            .finish()
    }
}

/// Last path segment of `T`'s type name, e.g. `Workbook`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
