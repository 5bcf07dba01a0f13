//! XLSX weekly report writer
//!
//! Writes a single worksheet (default `weekly_report`) with a header row and
//! one row per matching record:
//!
//! ```text
//! | ProjectName  | CRQ       | Task    | StartDate | Status    | Comments |
//! |--------------|-----------|---------|-----------|-----------|----------|
//! | Core upgrade | CRQ000101 | Cutover | 03/01/23  | completed | ok       |
//! ```
//!
//! Every value is written as text so the report reloads with the same
//! positional mapping it was written with.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use workstack_core::config::DEFAULT_SHEET_NAME;
use workstack_core::{RenderError, ReportRenderer, WeeklyReport, REPORT_HEADERS};

/// XLSX report writer
#[derive(Clone, Debug)]
pub struct ExcelReportWriter {
    /// Worksheet name
    pub sheet_name: String,
}

impl Default for ExcelReportWriter {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.into(),
        }
    }
}

impl ExcelReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set worksheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Write the report workbook to `path`
    pub fn write(&self, report: &WeeklyReport, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let mut workbook = self.build_workbook(report)?;
        workbook.save(path).map_err(xlsx_error)?;

        tracing::info!(path = %path.display(), rows = report.total(), "saved weekly report");
        Ok(())
    }

    /// Generate workbook bytes
    pub fn render_to_bytes(&self, report: &WeeklyReport) -> Result<Vec<u8>, RenderError> {
        let mut workbook = self.build_workbook(report)?;
        workbook.save_to_buffer().map_err(xlsx_error)
    }

    fn build_workbook(&self, report: &WeeklyReport) -> Result<Workbook, RenderError> {
        let mut workbook = Workbook::new();
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(0x4472C4)
            .set_font_color(0xFFFFFF)
            .set_border(FormatBorder::Thin);
        let text = Format::new().set_border(FormatBorder::Thin);

        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name).map_err(xlsx_error)?;

        for (col, title) in REPORT_HEADERS.iter().enumerate() {
            sheet
                .write_with_format(0, col as u16, *title, &header)
                .map_err(xlsx_error)?;
        }

        let mut row = 1u32;
        for report_row in &report.rows {
            for (col, value) in report_row.cells().iter().enumerate() {
                sheet
                    .write_string_with_format(row, col as u16, *value, &text)
                    .map_err(xlsx_error)?;
            }
            row += 1;
        }

        let last_col = (REPORT_HEADERS.len() - 1) as u16;
        sheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
        sheet.autofilter(0, 0, row - 1, last_col).map_err(xlsx_error)?;
        sheet.autofit();

        Ok(workbook)
    }
}

impl ReportRenderer for ExcelReportWriter {
    type Output = Vec<u8>;

    fn render(&self, report: &WeeklyReport) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(report)
    }
}

fn xlsx_error(err: XlsxError) -> RenderError {
    match err {
        XlsxError::IoError(io) => RenderError::Io(io),
        other => RenderError::Format(format!("Failed to create Excel report: {other}")),
    }
}
