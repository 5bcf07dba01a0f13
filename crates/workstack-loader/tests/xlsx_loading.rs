//! Integration tests for loading tracker workbooks

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::TempDir;
use workstack_loader::{load_records, load_report_rows, LoadError, RecordLoader};

const TRACKER_HEADER: [&str; 13] = [
    "Project Name",
    "Task",
    "Key Nodes",
    "Start Date",
    "Start Time",
    "Finish Date",
    "Finish Time",
    "IP Build Engineer",
    "Designer",
    "Project Manager",
    "CRQ",
    "Status",
    "Comments",
];

fn write_rows(dir: &TempDir, name: &str, rows: &[Vec<&str>]) -> PathBuf {
    let path = dir.path().join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save(&path).unwrap();
    path
}

fn tracker_row<'a>(
    project: &'a str,
    start: &'a str,
    crq: &'a str,
    status: &'a str,
) -> Vec<&'a str> {
    vec![
        project, "Cutover", "N3", start, "22:00", start, "23:30", "J. Smith", "A. Patel",
        "R. Jones", crq, status, "no issues",
    ]
}

#[test]
fn loads_one_record_per_row_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_rows(
        &dir,
        "live.xlsx",
        &[
            TRACKER_HEADER.to_vec(),
            tracker_row("Core upgrade", "03/01/23", "CRQ000101", "completed"),
            tracker_row("Edge rollout", "05/01/23", "CRQ000102", "in progress"),
        ],
    );

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].project_name, "Project Name");
    assert_eq!(records[0].status, "Status");

    let first = &records[1];
    assert_eq!(first.project_name, "Core upgrade");
    assert_eq!(first.task, "Cutover");
    assert_eq!(first.key_nodes, "N3");
    assert_eq!(first.start_date, "03/01/23");
    assert_eq!(first.start_time, "22:00");
    assert_eq!(first.finish_time, "23:30");
    assert_eq!(first.build_engineer, "J. Smith");
    assert_eq!(first.designer, "A. Patel");
    assert_eq!(first.project_manager, "R. Jones");
    assert_eq!(first.crq, "CRQ000101");
    assert_eq!(first.status, "completed");
    assert_eq!(first.comments, "no issues");

    assert_eq!(records[2].project_name, "Edge rollout");
}

#[test]
fn skip_rows_drops_header() {
    let dir = TempDir::new().unwrap();
    let path = write_rows(
        &dir,
        "live.xlsx",
        &[
            TRACKER_HEADER.to_vec(),
            tracker_row("Core upgrade", "03/01/23", "CRQ000101", "completed"),
        ],
    );

    let records = RecordLoader::new().skip_rows(1).load(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].project_name, "Core upgrade");
}

#[test]
fn short_rows_leave_trailing_fields_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_rows(&dir, "short.xlsx", &[vec!["Alpha", "Task", "N1", "04/01/23"]]);

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].start_date, "04/01/23");
    assert_eq!(records[0].crq, "");
    assert_eq!(records[0].status, "");
    assert_eq!(records[0].comments, "");
}

#[test]
fn extra_columns_are_ignored() {
    let dir = TempDir::new().unwrap();
    let mut row = tracker_row("Alpha", "04/01/23", "CRQ1", "cancelled");
    row.push("extra-1");
    row.push("extra-2");
    let path = write_rows(&dir, "wide.xlsx", &[row]);

    let records = load_records(&path).unwrap();
    assert_eq!(records[0].comments, "no issues");
}

#[test]
fn empty_sheet_yields_no_records() {
    let dir = TempDir::new().unwrap();
    let path = write_rows(&dir, "empty.xlsx", &[]);

    let records = load_records(&path).unwrap();
    assert!(records.is_empty());
}

#[test]
fn empty_leading_column_keeps_positions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 1, "Cutover").unwrap();
    sheet.write_string(0, 3, "04/01/23").unwrap();
    workbook.save(&path).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].project_name, "");
    assert_eq!(records[0].task, "Cutover");
    assert_eq!(records[0].start_date, "04/01/23");
}

#[test]
fn typed_cells_are_read_as_display_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typed.xlsx");
    let date_format = Format::new().set_num_format("dd/mm/yy");
    let time_format = Format::new().set_num_format("hh:mm");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Alpha").unwrap();
    sheet.write_number(0, 2, 3.0).unwrap();
    let start = ExcelDateTime::from_ymd(2023, 1, 4).unwrap();
    sheet
        .write_datetime_with_format(0, 3, &start, &date_format)
        .unwrap();
    let at = ExcelDateTime::from_hms(21, 30, 0).unwrap();
    sheet
        .write_datetime_with_format(0, 4, &at, &time_format)
        .unwrap();
    workbook.save(&path).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records[0].key_nodes, "3");
    assert_eq!(records[0].start_date, "04/01/23");
    assert_eq!(records[0].start_time, "21:30");
}

#[test]
fn missing_file_is_not_found() {
    let err = load_records(Path::new("/no/such/workstack_live.xlsx")).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
    assert!(err.to_string().contains("workstack_live.xlsx"));
}

#[test]
fn non_workbook_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.xlsx");
    std::fs::write(&path, "this is not a zip archive").unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, LoadError::WorkbookOpen { .. }));
}

#[test]
fn report_rows_skip_header_and_take_six_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_rows(
        &dir,
        "report.xlsx",
        &[
            vec!["ProjectName", "CRQ", "Task", "StartDate", "Status", "Comments"],
            vec!["Alpha", "CRQ1", "Cutover", "04/01/23", "completed", "ok", "ignored"],
        ],
    );

    let rows = load_report_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].cells(),
        ["Alpha", "CRQ1", "Cutover", "04/01/23", "completed", "ok"]
    );
}
