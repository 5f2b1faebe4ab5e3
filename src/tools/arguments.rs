// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Typed access to the named-argument bag of a `tools/call` request.

use serde_json::{Map, Value};

use crate::error::tool::ToolError;
use crate::pool::Handle;

/// The `arguments` object passed to a tool handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    /// Wraps an argument map.
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Returns the raw argument map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Returns the argument if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns a required argument of any type.
    pub fn value(&self, name: &str) -> Result<&Value, ToolError> {
        self.values
            .get(name)
            .ok_or_else(|| ToolError::invalid_argument(name, "missing required argument"))
    }

    /// Returns a required string argument.
    pub fn str(&self, name: &str) -> Result<&str, ToolError> {
        self.value(name)?
            .as_str()
            .ok_or_else(|| ToolError::invalid_argument(name, "expected a string"))
    }

    /// Returns a required boolean argument.
    pub fn bool(&self, name: &str) -> Result<bool, ToolError> {
        self.value(name)?
            .as_bool()
            .ok_or_else(|| ToolError::invalid_argument(name, "expected a boolean"))
    }

    /// Returns a required numeric argument.
    pub fn f64(&self, name: &str) -> Result<f64, ToolError> {
        self.value(name)?
            .as_f64()
            .ok_or_else(|| ToolError::invalid_argument(name, "expected a number"))
    }

    /// Returns a required integral argument.
    ///
    /// Numbers written with a zero fraction (`2.0`) are accepted.
    pub fn i64(&self, name: &str) -> Result<i64, ToolError> {
        let value = self.value(name)?;
        if let Some(n) = value.as_i64() {
            return Ok(n);
        }
        match value.as_f64() {
            Some(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 => {
                Ok(n as i64)
            }
            Some(_) => Err(ToolError::invalid_argument(name, "expected an integer")),
            None => Err(ToolError::invalid_argument(name, "expected a number")),
        }
    }

    /// Returns a required handle argument.
    pub fn handle(&self, name: &str) -> Result<Handle, ToolError> {
        self.str(name).map(Handle::from)
    }
}

impl From<Map<String, Value>> for ToolArguments {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}
