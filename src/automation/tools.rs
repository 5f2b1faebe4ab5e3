// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tool handlers exposing the spreadsheet object graph.

use serde_json::{json, Value};
use tracing::debug;

use super::model::{Application, Range, Workbook, Workbooks, Worksheet, Worksheets};
use crate::error::protocol::ProtocolError;
use crate::pool::HandlePool;
use crate::tools::{InputSchema, ParamType, ToolArguments, ToolDescriptor, ToolRegistry, ToolResult};

/// Registers every automation tool, in the order `tools/list` reports them.
pub fn register_automation_tools(registry: &mut ToolRegistry) -> Result<(), ProtocolError> {
    let tools = [
        ToolDescriptor::new(
            "create_object",
            InputSchema::object().required("progId", ParamType::String),
            create_object,
        )
        .with_description("Create an automation object from its ProgID."),
        ToolDescriptor::new(
            "application_set_visible",
            InputSchema::object()
                .required("applicationId", ParamType::String)
                .required("value", ParamType::Boolean),
            application_set_visible,
        ),
        ToolDescriptor::new(
            "application_set_display_alerts",
            InputSchema::object()
                .required("applicationId", ParamType::String)
                .required("value", ParamType::Boolean),
            application_set_display_alerts,
        ),
        ToolDescriptor::new(
            "application_quit",
            InputSchema::object().required("applicationId", ParamType::String),
            application_quit,
        ),
        ToolDescriptor::new(
            "application_get_workbooks",
            InputSchema::object().required("applicationId", ParamType::String),
            application_get_workbooks,
        ),
        ToolDescriptor::new(
            "workbooks_add",
            InputSchema::object().required("workbooksId", ParamType::String),
            workbooks_add,
        ),
        ToolDescriptor::new(
            "workbooks_get_count",
            InputSchema::object().required("workbooksId", ParamType::String),
            workbooks_get_count,
        ),
        ToolDescriptor::new(
            "workbooks_item",
            InputSchema::object()
                .required("workbooksId", ParamType::String)
                .required("index", ParamType::Integer),
            workbooks_item,
        ),
        ToolDescriptor::new(
            "workbook_get_worksheets",
            InputSchema::object().required("workbookId", ParamType::String),
            workbook_get_worksheets,
        ),
        ToolDescriptor::new(
            "worksheets_get_count",
            InputSchema::object().required("worksheetsId", ParamType::String),
            worksheets_get_count,
        ),
        ToolDescriptor::new(
            "worksheets_item",
            InputSchema::object()
                .required("worksheetsId", ParamType::String)
                .required("index", ParamType::Integer),
            worksheets_item,
        ),
        ToolDescriptor::new(
            "worksheet_cells",
            InputSchema::object()
                .required("worksheetId", ParamType::String)
                .required("row", ParamType::Integer)
                .required("column", ParamType::Integer),
            worksheet_cells,
        )
        .with_description("Get the single-cell range at a 1-based row and column."),
        ToolDescriptor::new(
            "range_set_value",
            InputSchema::object()
                .required("rangeId", ParamType::String)
                .required("value", ParamType::String),
            range_set_value,
        ),
        ToolDescriptor::new(
            "range_get_value",
            InputSchema::object().required("rangeId", ParamType::String),
            range_get_value,
        ),
    ];

    for tool in tools {
        registry.register(tool)?;
    }
    Ok(())
}

fn create_object(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let prog_id = args.str("progId")?;
    let application = Application::create(prog_id)?;
    let handle = pool.insert(application)?;
    debug!(prog_id, handle = %handle, "Created automation object");
    Ok(handle.into())
}

fn application_set_visible(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let application = pool.get::<Application>(&args.handle("applicationId")?)?;
    let visible = application.set_visible(args.bool("value")?)?;
    Ok(json!(visible).into())
}

fn application_set_display_alerts(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let application = pool.get::<Application>(&args.handle("applicationId")?)?;
    let display_alerts = application.set_display_alerts(args.bool("value")?)?;
    Ok(json!(display_alerts).into())
}

fn application_quit(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    pool.get::<Application>(&args.handle("applicationId")?)?
        .quit()?;
    Ok(Value::Null.into())
}

fn application_get_workbooks(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let workbooks = pool
        .get::<Application>(&args.handle("applicationId")?)?
        .workbooks()?;
    Ok(pool.insert(workbooks)?.into())
}

fn workbooks_add(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let workbook = pool.get::<Workbooks>(&args.handle("workbooksId")?)?.add()?;
    Ok(pool.insert(workbook)?.into())
}

fn workbooks_get_count(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let count = pool.get::<Workbooks>(&args.handle("workbooksId")?)?.count()?;
    Ok(json!(count).into())
}

fn workbooks_item(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let index = args.i64("index")?;
    let workbook = pool
        .get::<Workbooks>(&args.handle("workbooksId")?)?
        .item(index)?;
    Ok(pool.insert(workbook)?.into())
}

fn workbook_get_worksheets(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let worksheets = pool
        .get::<Workbook>(&args.handle("workbookId")?)?
        .worksheets()?;
    Ok(pool.insert(worksheets)?.into())
}

fn worksheets_get_count(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let count = pool
        .get::<Worksheets>(&args.handle("worksheetsId")?)?
        .count()?;
    Ok(json!(count).into())
}

fn worksheets_item(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let index = args.i64("index")?;
    let worksheet = pool
        .get::<Worksheets>(&args.handle("worksheetsId")?)?
        .item(index)?;
    Ok(pool.insert(worksheet)?.into())
}

fn worksheet_cells(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let row = args.i64("row")?;
    let column = args.i64("column")?;
    let range = pool
        .get::<Worksheet>(&args.handle("worksheetId")?)?
        .cells(row, column)?;
    Ok(pool.insert(range)?.into())
}

fn range_set_value(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let value = Value::String(args.str("value")?.to_string());
    let stored = pool.get::<Range>(&args.handle("rangeId")?)?.set_value(value)?;
    Ok(stored.into())
}

fn range_get_value(pool: &mut HandlePool, args: &ToolArguments) -> ToolResult {
    let value = pool.get::<Range>(&args.handle("rangeId")?)?.value()?;
    Ok(value.into())
}
