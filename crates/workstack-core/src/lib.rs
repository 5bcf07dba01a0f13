//! # workstack-core
//!
//! Core domain model for workstack weekly reports.
//!
//! This crate provides:
//! - Domain types: `Record`, `ReportRow`, `DateWindow`, `WeeklyReport`
//! - The completed/cancelled filter over a trailing date window
//! - The `ReportRenderer` trait implemented by output backends
//! - Configuration and error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workstack_core::{DateWindow, MatchMode, Record, WeeklyReport};
//!
//! let anchor = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
//! let window = DateWindow::trailing_week(anchor).unwrap();
//!
//! let records = vec![
//!     Record::new("Core upgrade").start_date("04/01/23").status("completed"),
//!     Record::new("Edge rollout").start_date("04/01/23").status("in progress"),
//! ];
//!
//! let report = WeeklyReport::build(window, &records, MatchMode::Exact);
//! assert_eq!(report.total(), 1);
//! ```

pub mod config;
pub mod filter;
pub mod window;

pub use config::{ConfigError, ReportConfig};
pub use filter::{is_reportable, MatchMode, STATUS_CANCELLED, STATUS_COMPLETED};
pub use window::{parse_anchor, DateWindow, ANCHOR_FORMAT, DISPLAY_FORMAT, WINDOW_DAYS};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Records
// ============================================================================

/// Number of positional columns mapped onto a [`Record`]
pub const RECORD_COLUMNS: usize = 13;

/// Column headings of the weekly report, shared by every output backend
pub const REPORT_HEADERS: [&str; 6] = [
    "ProjectName",
    "CRQ",
    "Task",
    "StartDate",
    "Status",
    "Comments",
];

/// One row of the project tracker workbook.
///
/// Every field holds the raw cell text. Column order in the workbook is:
/// project name, task, key nodes, start date, start time, finish date,
/// finish time, build engineer, designer, project manager, CRQ, status,
/// comments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub project_name: String,
    pub task: String,
    pub key_nodes: String,
    pub start_date: String,
    pub start_time: String,
    pub finish_date: String,
    pub finish_time: String,
    pub build_engineer: String,
    pub designer: String,
    pub project_manager: String,
    /// Change request identifier
    pub crq: String,
    pub status: String,
    pub comments: String,
}

impl Record {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Build a record from positional cell values.
    ///
    /// Cells past [`RECORD_COLUMNS`] are ignored; missing trailing cells
    /// leave their fields empty.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (index, cell) in cells.into_iter().take(RECORD_COLUMNS).enumerate() {
            *record.field_mut(index) = cell.into();
        }
        record
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.project_name,
            1 => &mut self.task,
            2 => &mut self.key_nodes,
            3 => &mut self.start_date,
            4 => &mut self.start_time,
            5 => &mut self.finish_date,
            6 => &mut self.finish_time,
            7 => &mut self.build_engineer,
            8 => &mut self.designer,
            9 => &mut self.project_manager,
            10 => &mut self.crq,
            11 => &mut self.status,
            _ => &mut self.comments,
        }
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = date.into();
        self
    }

    pub fn crq(mut self, crq: impl Into<String>) -> Self {
        self.crq = crq.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }
}

/// The six report columns projected from a [`Record`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub project_name: String,
    pub crq: String,
    pub task: String,
    pub start_date: String,
    pub status: String,
    pub comments: String,
}

impl ReportRow {
    /// Build a row from the first six cells of a written report
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::into);
        let mut next = || cells.next().unwrap_or_default();
        Self {
            project_name: next(),
            crq: next(),
            task: next(),
            start_date: next(),
            status: next(),
            comments: next(),
        }
    }

    /// Cell values in [`REPORT_HEADERS`] order
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.project_name,
            &self.crq,
            &self.task,
            &self.start_date,
            &self.status,
            &self.comments,
        ]
    }
}

impl From<&Record> for ReportRow {
    fn from(record: &Record) -> Self {
        Self {
            project_name: record.project_name.clone(),
            crq: record.crq.clone(),
            task: record.task.clone(),
            start_date: record.start_date.clone(),
            status: record.status.clone(),
            comments: record.comments.clone(),
        }
    }
}

// ============================================================================
// Weekly Report
// ============================================================================

/// Filtered rows for one trailing window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    pub window: DateWindow,
    pub rows: Vec<ReportRow>,
}

impl WeeklyReport {
    /// Keep the reportable records, preserving their order
    pub fn build(window: DateWindow, records: &[Record], mode: MatchMode) -> Self {
        let rows: Vec<ReportRow> = records
            .iter()
            .filter(|record| is_reportable(record, &window, mode))
            .map(ReportRow::from)
            .collect();

        tracing::info!(
            scanned = records.len(),
            matched = rows.len(),
            from = %window.start(),
            to = %window.end(),
            "filtered weekly report"
        );

        Self { window, rows }
    }

    /// Number of matching rows (the footer total)
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output backend for a weekly report
pub trait ReportRenderer {
    type Output;

    /// Render the report to the output format
    fn render(&self, report: &WeeklyReport) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Anchor date input error
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Error parsing date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Date {0} is too early to report on")]
    OutOfRange(chrono::NaiveDate),

    #[error("Error reading input: {0}")]
    Read(#[from] std::io::Error),
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}
