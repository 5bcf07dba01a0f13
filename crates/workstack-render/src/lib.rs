//! # workstack-render
//!
//! Output backends for weekly reports.
//!
//! This crate provides:
//! - Console table rendering with a row-count footer
//! - XLSX report writing (the `weekly_report` sheet)
//! - JSON output for scripting
//!
//! ## Example
//!
//! ```rust,ignore
//! use workstack_core::{ReportRenderer, WeeklyReport};
//! use workstack_render::{ConsoleRenderer, ExcelReportWriter, JsonRenderer};
//!
//! // Console table, coloured status column
//! ConsoleRenderer::new().color(true).print(&report)?;
//!
//! // Report workbook
//! ExcelReportWriter::new().write(&report, "workstack_report.xlsx")?;
//!
//! // JSON
//! let json = JsonRenderer::new().render(&report)?;
//! ```

pub mod console;
pub mod excel;

pub use console::{banner, ConsoleRenderer};
pub use excel::ExcelReportWriter;

use serde::Serialize;
use workstack_core::{DateWindow, RenderError, ReportRenderer, ReportRow, WeeklyReport};

/// JSON report renderer
#[derive(Clone, Debug)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    window: &'a DateWindow,
    rows: &'a [ReportRow],
    total: usize,
}

impl ReportRenderer for JsonRenderer {
    type Output = String;

    fn render(&self, report: &WeeklyReport) -> Result<String, RenderError> {
        let view = JsonReport {
            window: &report.window,
            rows: &report.rows,
            total: report.total(),
        };

        let result = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };
        result.map_err(|e| RenderError::Format(e.to_string()))
    }
}
