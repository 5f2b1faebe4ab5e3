// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tools every server exposes regardless of the automation surface behind it.

use serde_json::json;

use super::registry::{ToolDescriptor, ToolRegistry, ToolResult};
use super::schema::{InputSchema, ParamType};
use super::ToolArguments;
use crate::error::protocol::ProtocolError;
use crate::pool::HandlePool;

/// Name of the tool that drops a pool entry.
pub const HANDLE_RELEASE: &str = "handle_release";

/// Name of the tool that reports what kind of object a handle refers to.
pub const HANDLE_DESCRIBE: &str = "handle_describe";

/// Registers the handle management tools.
pub fn register_builtin_tools(registry: &mut ToolRegistry) -> Result<(), ProtocolError> {
    registry.register(
        ToolDescriptor::new(
            HANDLE_RELEASE,
            InputSchema::object().required("handle", ParamType::String),
            handle_release,
        )
        .with_description("Release a handle. The handle is unknown afterwards."),
    )?;
    registry.register(
        ToolDescriptor::new(
            HANDLE_DESCRIBE,
            InputSchema::object().required("handle", ParamType::String),
            handle_describe,
        )
        .with_description("Report the object type behind a handle."),
    )?;
    Ok(())
}

fn handle_release(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    pool.release(&args.handle("handle")?)?;
    Ok(json!(true).into())
}

fn handle_describe(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let handle = args.handle("handle")?;
    let type_name = pool.type_name(&handle)?;
    Ok(json!({ "handle": handle, "type": type_name }).into())
}
