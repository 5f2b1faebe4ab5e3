// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The operation registry: a closed table of named tools.
//!
//! The registry is filled once at startup and then handed to the dispatcher,
//! which only ever reads it. The stored schemas are the single source of truth
//! for both `tools/list` and strict argument checking.

use hashbrown::HashMap;
use std::fmt;

use serde_json::Value;

use super::arguments::ToolArguments;
use crate::error::protocol::ProtocolError;
use crate::error::tool::ToolError;
use crate::pool::{Handle, HandlePool};

/// What a tool hands back on success.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// A plain JSON value.
    Value(Value),
    /// A handle to an object the tool placed in the pool.
    Handle(Handle),
}

impl ToolOutput {
    /// Converts the output into the JSON value reported to the client.
    ///
    /// Handles are reported as their identifier string.
    pub fn into_value(self) -> Value {
        match self {
            ToolOutput::Value(value) => value,
            ToolOutput::Handle(handle) => Value::String(handle.into_inner()),
        }
    }
}

impl From<Value> for ToolOutput {
    fn from(value: Value) -> Self {
        ToolOutput::Value(value)
    }
}

impl From<Handle> for ToolOutput {
    fn from(handle: Handle) -> Self {
        ToolOutput::Handle(handle)
    }
}

/// Result type returned by tool handlers.
pub type ToolResult = Result<ToolOutput, ToolError>;

/// Boxed tool handler.
pub type ToolHandler = Box<dyn Fn(&mut HandlePool, &ToolArguments) -> ToolResult + Send + Sync>;

/// A named, schema-described operation.
pub struct ToolDescriptor {
    name: String,
    description: Option<String>,
    input_schema: Value,
    handler: ToolHandler,
}

impl ToolDescriptor {
    /// Creates a descriptor from a name, an input schema and a handler.
    pub fn new<S, F>(name: impl Into<String>, input_schema: S, handler: F) -> Self
    where
        S: Into<Value>,
        F: Fn(&mut HandlePool, &ToolArguments) -> ToolResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            input_schema: input_schema.into(),
            handler: Box::new(handler),
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tool description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The input schema exactly as registered.
    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    /// Runs the handler against `pool`.
    pub fn invoke(&self, pool: &mut HandlePool, arguments: &ToolArguments) -> ToolResult {
        (self.handler)(pool, arguments)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Table of registered tools, in registration order.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool. Names must be non-empty and unique.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ProtocolError> {
        if descriptor.name.trim().is_empty() {
            return Err(ProtocolError::InvalidToolName(descriptor.name));
        }
        if self.index.contains_key(&descriptor.name) {
            return Err(ProtocolError::DuplicateTool(descriptor.name));
        }
        self.index
            .insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Looks a tool up by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Iterates over all tools in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::schema::{InputSchema, ParamType};
    use serde_json::json;

    fn echo_tool(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(
            name,
            InputSchema::object().required("text", ParamType::String),
            |_pool: &mut HandlePool, args: &ToolArguments| Ok(json!(args.str("text")?).into()),
        )
    }

    #[test]
    fn test_lookup_finds_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo")).unwrap();

        let tool = registry.lookup("echo").unwrap();
        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.input_schema()["required"], json!(["text"]));
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo")).unwrap();
        assert_eq!(
            registry.register(echo_tool("echo")),
            Err(ProtocolError::DuplicateTool("echo".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut registry = ToolRegistry::new();
        assert_eq!(
            registry.register(echo_tool("  ")),
            Err(ProtocolError::InvalidToolName("  ".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_descriptors_keep_registration_order() {
        let mut registry = ToolRegistry::new();
        for name in ["c", "a", "b"] {
            registry.register(echo_tool(name)).unwrap();
        }
        let names: Vec<_> = registry.descriptors().map(|tool| tool.name()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_invoke_runs_handler_against_pool() {
        let minting = ToolDescriptor::new(
            "mint",
            InputSchema::object(),
            |pool: &mut HandlePool, _args: &ToolArguments| Ok(pool.insert(5u8)?.into()),
        );
        let mut pool = HandlePool::new();

        let output = minting.invoke(&mut pool, &ToolArguments::default()).unwrap();
        let ToolOutput::Handle(handle) = output else {
            panic!("expected a handle");
        };
        assert_eq!(pool.get::<u8>(&handle).unwrap(), &5);
    }

    #[test]
    fn test_handle_output_is_reported_as_string() {
        let output = ToolOutput::from(Handle::new("h-9"));
        assert_eq!(output.into_value(), json!("h-9"));
    }
}
