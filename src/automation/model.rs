// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-memory spreadsheet object graph.
//!
//! Every type here is a cheap, cloneable reference into shared state, the way
//! automation objects behave: two handles to the same workbook observe the same
//! cells. All operations fail with [`AutomationError::ApplicationQuit`] once the
//! owning application has quit.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::error::{AutomationError, Result};

/// ProgID that creates an [`Application`].
pub const SHEET_APPLICATION: &str = "Sheet.Application";

/// Highest addressable row.
pub const MAX_ROWS: i64 = 1_048_576;

/// Highest addressable column.
pub const MAX_COLUMNS: i64 = 16_384;

type Shared<T> = Arc<RwLock<T>>;

#[derive(Debug)]
struct ApplicationState {
    visible: bool,
    display_alerts: bool,
    quit: bool,
    workbooks: Vec<Shared<WorkbookState>>,
    books_created: u32,
}

#[derive(Debug)]
struct WorkbookState {
    name: String,
    worksheets: Vec<Shared<WorksheetState>>,
}

#[derive(Debug)]
struct WorksheetState {
    name: String,
    cells: BTreeMap<(u32, u32), Value>,
}

impl WorksheetState {
    fn named(name: impl Into<String>) -> Shared<Self> {
        Arc::new(RwLock::new(Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }))
    }
}

fn resolve_index(collection: &'static str, index: i64, count: usize) -> Result<usize> {
    if index < 1 || index as u64 > count as u64 {
        return Err(AutomationError::IndexOutOfRange {
            collection,
            index,
            count,
        });
    }
    Ok(index as usize - 1)
}

/// The root object: a running spreadsheet application.
#[derive(Debug, Clone)]
pub struct Application {
    state: Shared<ApplicationState>,
}

impl Application {
    /// Starts a new, hidden application with no workbooks.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ApplicationState {
                visible: false,
                display_alerts: true,
                quit: false,
                workbooks: Vec::new(),
                books_created: 0,
            })),
        }
    }

    /// Creates the object registered under `prog_id`.
    pub fn create(prog_id: &str) -> Result<Self> {
        if prog_id.eq_ignore_ascii_case(SHEET_APPLICATION) {
            Ok(Self::new())
        } else {
            Err(AutomationError::UnknownProgId(prog_id.to_string()))
        }
    }

    fn ensure_running(&self) -> Result<()> {
        if self.state.read().quit {
            Err(AutomationError::ApplicationQuit)
        } else {
            Ok(())
        }
    }

    /// Whether the application window is shown.
    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }

    /// Shows or hides the application window, returning the new value.
    pub fn set_visible(&self, visible: bool) -> Result<bool> {
        self.ensure_running()?;
        self.state.write().visible = visible;
        Ok(visible)
    }

    /// Whether the application raises alerts.
    pub fn display_alerts(&self) -> bool {
        self.state.read().display_alerts
    }

    /// Enables or disables alerts, returning the new value.
    pub fn set_display_alerts(&self, display_alerts: bool) -> Result<bool> {
        self.ensure_running()?;
        self.state.write().display_alerts = display_alerts;
        Ok(display_alerts)
    }

    /// Quits the application. Every object it owns becomes unusable.
    pub fn quit(&self) -> Result<()> {
        let mut state = self.state.write();
        if state.quit {
            return Err(AutomationError::ApplicationQuit);
        }
        state.quit = true;
        state.workbooks.clear();
        Ok(())
    }

    /// Whether [`Application::quit`] has been called.
    pub fn has_quit(&self) -> bool {
        self.state.read().quit
    }

    /// The collection of open workbooks.
    pub fn workbooks(&self) -> Result<Workbooks> {
        self.ensure_running()?;
        Ok(Workbooks { app: self.clone() })
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// The open workbooks of an application.
#[derive(Debug, Clone)]
pub struct Workbooks {
    app: Application,
}

impl Workbooks {
    /// Number of open workbooks.
    pub fn count(&self) -> Result<usize> {
        self.app.ensure_running()?;
        Ok(self.app.state.read().workbooks.len())
    }

    /// Opens a new workbook with a single empty worksheet.
    pub fn add(&self) -> Result<Workbook> {
        self.app.ensure_running()?;
        let mut app = self.app.state.write();
        app.books_created += 1;
        let state = Arc::new(RwLock::new(WorkbookState {
            name: format!("Book{}", app.books_created),
            worksheets: vec![WorksheetState::named("Sheet1")],
        }));
        app.workbooks.push(Arc::clone(&state));
        Ok(Workbook {
            app: self.app.clone(),
            state,
        })
    }

    /// The workbook at 1-based `index`.
    pub fn item(&self, index: i64) -> Result<Workbook> {
        self.app.ensure_running()?;
        let app = self.app.state.read();
        let position = resolve_index("Workbooks", index, app.workbooks.len())?;
        Ok(Workbook {
            app: self.app.clone(),
            state: Arc::clone(&app.workbooks[position]),
        })
    }
}

/// One open workbook.
#[derive(Debug, Clone)]
pub struct Workbook {
    app: Application,
    state: Shared<WorkbookState>,
}

impl Workbook {
    /// The workbook name, e.g. `Book1`.
    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    /// The worksheets of this workbook.
    pub fn worksheets(&self) -> Result<Worksheets> {
        self.app.ensure_running()?;
        Ok(Worksheets {
            workbook: self.clone(),
        })
    }
}

/// The worksheets of a workbook.
#[derive(Debug, Clone)]
pub struct Worksheets {
    workbook: Workbook,
}

impl Worksheets {
    /// Number of worksheets.
    pub fn count(&self) -> Result<usize> {
        self.workbook.app.ensure_running()?;
        Ok(self.workbook.state.read().worksheets.len())
    }

    /// The worksheet at 1-based `index`.
    pub fn item(&self, index: i64) -> Result<Worksheet> {
        self.workbook.app.ensure_running()?;
        let book = self.workbook.state.read();
        let position = resolve_index("Worksheets", index, book.worksheets.len())?;
        Ok(Worksheet {
            app: self.workbook.app.clone(),
            state: Arc::clone(&book.worksheets[position]),
        })
    }
}

/// One worksheet.
#[derive(Debug, Clone)]
pub struct Worksheet {
    app: Application,
    state: Shared<WorksheetState>,
}

impl Worksheet {
    /// The worksheet name, e.g. `Sheet1`.
    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    /// The single cell at 1-based (`row`, `column`).
    pub fn cells(&self, row: i64, column: i64) -> Result<Range> {
        self.app.ensure_running()?;
        if !(1..=MAX_ROWS).contains(&row) || !(1..=MAX_COLUMNS).contains(&column) {
            return Err(AutomationError::InvalidCell { row, column });
        }
        Ok(Range {
            worksheet: self.clone(),
            row: row as u32,
            column: column as u32,
        })
    }
}

/// A single-cell range.
#[derive(Debug, Clone)]
pub struct Range {
    worksheet: Worksheet,
    row: u32,
    column: u32,
}

impl Range {
    /// 1-based (row, column) of the cell.
    pub fn address(&self) -> (u32, u32) {
        (self.row, self.column)
    }

    /// The cell value, `null` when the cell is empty.
    pub fn value(&self) -> Result<Value> {
        self.worksheet.app.ensure_running()?;
        Ok(self
            .worksheet
            .state
            .read()
            .cells
            .get(&(self.row, self.column))
            .cloned()
            .unwrap_or(Value::Null))
    }

    /// Stores `value` in the cell and returns it. `null` clears the cell.
    pub fn set_value(&self, value: Value) -> Result<Value> {
        self.worksheet.app.ensure_running()?;
        let mut sheet = self.worksheet.state.write();
        if value.is_null() {
            sheet.cells.remove(&(self.row, self.column));
        } else {
            sheet.cells.insert((self.row, self.column), value.clone());
        }
        Ok(value)
    }
}
