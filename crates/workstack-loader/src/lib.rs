//! # workstack-loader
//!
//! Reads project tracker rows from the first worksheet of an XLSX workbook.
//!
//! Cells are mapped positionally: column A is always field 0 and row 1 is
//! always the first record, even when the sheet's used range starts further
//! in. Every cell is converted to the text a spreadsheet would display.
//!
//! ## Example
//!
//! ```rust,ignore
//! use workstack_loader::RecordLoader;
//!
//! let records = RecordLoader::new().load("workstack_live.xlsx")?;
//! println!("{} rows", records.len());
//! ```

pub mod error;

use std::path::Path;

use calamine::{open_workbook, Data, ExcelDateTime, Range, Reader, Xlsx, XlsxError};
use chrono::Timelike;
use workstack_core::{Record, ReportRow, DISPLAY_FORMAT};

pub use error::{LoadError, Result};

/// Loads [`Record`]s from a tracker workbook
#[derive(Clone, Debug, Default)]
pub struct RecordLoader {
    /// Leading rows to drop before mapping
    pub skip_rows: usize,
}

impl RecordLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip leading rows such as a header
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    /// Load one record per row of the first worksheet, in row order
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let rows = read_first_sheet(path.as_ref())?;
        let records: Vec<Record> = rows
            .into_iter()
            .skip(self.skip_rows)
            .map(Record::from_cells)
            .collect();

        tracing::info!(
            path = %path.as_ref().display(),
            records = records.len(),
            skipped = self.skip_rows,
            "loaded tracker records"
        );
        Ok(records)
    }
}

/// Load every row of the first worksheet as a [`Record`]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    RecordLoader::new().load(path)
}

/// Reload a written weekly report, skipping its header row
pub fn load_report_rows(path: impl AsRef<Path>) -> Result<Vec<ReportRow>> {
    let rows = read_first_sheet(path.as_ref())?;
    Ok(rows.into_iter().skip(1).map(ReportRow::from_cells).collect())
}

/// Read the first worksheet as rows of display text
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<String>>> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path_str));
    }

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| LoadError::WorkbookOpen {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::NoWorksheet(path_str.clone()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    tracing::debug!(path = %path_str, sheet = %sheet_name, "reading first worksheet");

    Ok(range_to_rows(&range))
}

/// Convert a used range into rows anchored at A1
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }
    rows
}

/// Text shown for a cell
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => datetime_to_string(dt),
    }
}

/// Date cells as `DD/MM/YY`, time cells as `HH:MM`, both otherwise
fn datetime_to_string(dt: &ExcelDateTime) -> String {
    let serial = dt.as_f64();
    if dt.is_duration() {
        return serial.to_string();
    }

    match dt.as_datetime() {
        Some(value) if serial < 1.0 => value.format("%H:%M").to_string(),
        Some(value) if value.time().num_seconds_from_midnight() == 0 => {
            value.format(DISPLAY_FORMAT).to_string()
        }
        Some(value) => value.format(&format!("{DISPLAY_FORMAT} %H:%M")).to_string(),
        None => {
            tracing::warn!(serial, "date cell out of range, keeping serial value");
            serial.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_to_string_formats_scalars() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("done".into())), "done");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(42.0)), "42");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_rows(&range).is_empty());
    }

    #[test]
    fn offset_range_is_padded_to_a1() {
        let mut range: Range<Data> = Range::new((1, 2), (1, 3));
        range.set_value((1, 2), Data::String("Alpha".into()));
        range.set_value((1, 3), Data::String("Task".into()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["", "", "Alpha", "Task"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_records("/definitely/not/here.xlsx").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
