// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Spreadsheet automation surface.
//!
//! An in-memory object graph (Application → Workbooks → Workbook → Worksheets →
//! Worksheet → Range) registered against the dispatcher through the ordinary
//! tool registration API. Each object a tool returns is parked in the handle
//! pool and addressed by its handle afterwards.
//!
//! # Example
//!
//! ```
//! use kapili_mcp_lib::automation::{register_automation_tools, Application, SHEET_APPLICATION};
//! use kapili_mcp_lib::tools::ToolRegistry;
//!
//! let mut registry = ToolRegistry::new();
//! register_automation_tools(&mut registry).unwrap();
//! assert!(registry.lookup("create_object").is_some());
//!
//! let app = Application::create(SHEET_APPLICATION).unwrap();
//! let book = app.workbooks().unwrap().add().unwrap();
//! assert_eq!(book.name(), "Book1");
//! ```

pub mod error;
pub mod model;
pub mod tools;

pub use error::AutomationError;
pub use model::{
    Application, Range, Workbook, Workbooks, Worksheet, Worksheets, SHEET_APPLICATION,
};
pub use tools::register_automation_tools;
