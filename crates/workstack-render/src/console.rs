//! Console table renderer
//!
//! Renders the weekly report as a bordered table with a line between every
//! row, followed by a footer row carrying the match count:
//!
//! ```text
//! +--------------+-----------+---------+-----------+-----------+----------+
//! | ProjectName  | CRQ       | Task    | StartDate | Status    | Comments |
//! +==============+===========+=========+===========+===========+==========+
//! | Core upgrade | CRQ000101 | Cutover | 03/01/23  | completed | ok       |
//! +--------------+-----------+---------+-----------+-----------+----------+
//! |              |           |         |           | Total     | 1        |
//! +--------------+-----------+---------+-----------+-----------+----------+
//! ```

use chrono::NaiveDate;
use prettytable::{format, Cell, Row, Table};
use workstack_core::{
    RenderError, ReportRenderer, WeeklyReport, ANCHOR_FORMAT, REPORT_HEADERS, STATUS_CANCELLED,
    STATUS_COMPLETED,
};

/// Column holding the status, coloured when enabled
const STATUS_COLUMN: usize = 4;

/// Console table renderer
#[derive(Clone, Debug, Default)]
pub struct ConsoleRenderer {
    /// Green for completed, red for cancelled
    pub colorize: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Build the table: header, one row per match, then the total footer
    pub fn build_table(&self, report: &WeeklyReport) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_DEFAULT);
        table.set_titles(Row::new(
            REPORT_HEADERS.iter().map(|h| Cell::new(h)).collect(),
        ));

        for row in &report.rows {
            let cells = row
                .cells()
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    let cell = Cell::new(value);
                    if col == STATUS_COLUMN {
                        self.style_status(cell, value)
                    } else {
                        cell
                    }
                })
                .collect();
            table.add_row(Row::new(cells));
        }

        let mut footer = vec![Cell::new(""); REPORT_HEADERS.len() - 2];
        footer.push(Cell::new("Total").style_spec("b"));
        footer.push(Cell::new(&report.total().to_string()).style_spec("b"));
        table.add_row(Row::new(footer));

        table
    }

    fn style_status(&self, cell: Cell, status: &str) -> Cell {
        if !self.colorize {
            return cell;
        }
        match status {
            STATUS_COMPLETED => cell.style_spec("Fg"),
            STATUS_CANCELLED => cell.style_spec("Fr"),
            _ => cell,
        }
    }

    /// Print the table to stdout, applying colours when enabled
    pub fn print(&self, report: &WeeklyReport) -> Result<usize, RenderError> {
        let lines = self
            .build_table(report)
            .print_tty(self.colorize)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        tracing::debug!(lines, rows = report.total(), "printed report table");
        Ok(lines)
    }
}

impl ReportRenderer for ConsoleRenderer {
    type Output = String;

    /// Plain-text table; colours only apply when printing to a terminal
    fn render(&self, report: &WeeklyReport) -> Result<String, RenderError> {
        Ok(self.build_table(report).to_string())
    }
}

/// Header lines printed above the table
pub fn banner(report: &WeeklyReport, today: NaiveDate) -> String {
    format!(
        "\t\t\t## Today's Date: {} ##\n\t\t\t-- Report FROM: {} --\n\t\t\t-- Report TO: {} --\n",
        today.format("%-d %B %Y"),
        report.window.start().format(ANCHOR_FORMAT),
        report.window.end().format(ANCHOR_FORMAT),
    )
}
