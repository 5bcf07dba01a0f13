//! Trailing date window
//!
//! A weekly report covers the seven calendar days before the anchor date.
//! The anchor itself is excluded: an anchor of Monday 09/01/2023 covers
//! Monday 02/01/23 through Sunday 08/01/23.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::InputError;

/// Number of days covered by a weekly window
pub const WINDOW_DAYS: u64 = 7;

/// Format accepted for the anchor date (e.g. `02/01/2023`)
pub const ANCHOR_FORMAT: &str = "%d/%m/%Y";

/// Format of the window entries, matching the tracker's start-date column (e.g. `02/01/23`)
pub const DISPLAY_FORMAT: &str = "%d/%m/%y";

/// Parse an anchor date as typed by the user.
///
/// The input must be exactly `DD/MM/YYYY` with zero-padded day and month
/// and a four-digit year. Only the trailing line terminator is removed; any
/// other stray character is a parse error.
pub fn parse_anchor(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim_end_matches(['\r', '\n']);
    let invalid = |reason: String| InputError::InvalidDate {
        input: trimmed.to_string(),
        reason,
    };

    if !has_anchor_shape(trimmed) {
        return Err(invalid("expected DD/MM/YYYY".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ANCHOR_FORMAT).map_err(|e| invalid(e.to_string()))
}

/// `DD/MM/YYYY`: ten ASCII bytes, slashes at 2 and 5, digits elsewhere
fn has_anchor_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Half-open range of calendar days `[anchor - 7 days, anchor)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
    /// Window entries in [`DISPLAY_FORMAT`], oldest first
    labels: Vec<String>,
    #[serde(skip)]
    days: Vec<NaiveDate>,
}

impl DateWindow {
    /// Build the seven-day window ending (exclusive) at `anchor`.
    ///
    /// Fails when the window would start before the earliest representable date.
    pub fn trailing_week(anchor: NaiveDate) -> Result<Self, InputError> {
        let start = anchor
            .checked_sub_days(Days::new(WINDOW_DAYS))
            .ok_or(InputError::OutOfRange(anchor))?;

        let mut days = Vec::with_capacity(WINDOW_DAYS as usize);
        let mut current = start;
        while current < anchor {
            days.push(current);
            current = current.succ_opt().unwrap_or(anchor);
        }

        let labels = days
            .iter()
            .map(|day| day.format(DISPLAY_FORMAT).to_string())
            .collect();

        tracing::debug!(%start, end = %anchor, "built date window");

        Ok(Self {
            start,
            end: anchor,
            labels,
            days,
        })
    }

    /// First day of the window
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The anchor date; not part of the window
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Calendar days in the window, oldest first
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Formatted entries, oldest first
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Exact string membership
    pub fn contains_label(&self, label: &str) -> bool {
        self.labels.iter().any(|entry| entry == label)
    }

    /// Calendar membership
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn window_has_seven_days_before_anchor() {
        let window = DateWindow::trailing_week(date(2023, 1, 9)).unwrap();

        assert_eq!(
            window.labels(),
            [
                "02/01/23", "03/01/23", "04/01/23", "05/01/23", "06/01/23", "07/01/23",
                "08/01/23"
            ]
        );
        assert_eq!(window.start(), date(2023, 1, 2));
        assert_eq!(window.end(), date(2023, 1, 9));
    }

    #[test]
    fn window_excludes_anchor() {
        let window = DateWindow::trailing_week(date(2023, 1, 9)).unwrap();
        assert!(!window.contains_label("09/01/23"));
        assert!(!window.contains_date(date(2023, 1, 9)));
        assert!(window.contains_date(date(2023, 1, 8)));
        assert!(!window.contains_date(date(2023, 1, 1)));
    }

    #[test]
    fn window_is_strictly_increasing_and_distinct() {
        for anchor in [
            date(2023, 1, 1),
            date(2024, 3, 3),
            date(2023, 3, 1),
            date(2000, 12, 31),
        ] {
            let window = DateWindow::trailing_week(anchor).unwrap();
            assert_eq!(window.len(), 7);
            assert!(window.days().windows(2).all(|pair| pair[0] < pair[1]));

            let mut labels = window.labels().to_vec();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), 7);

            let last = *window.days().last().unwrap();
            assert_eq!(last.succ_opt(), Some(anchor));
        }
    }

    #[test]
    fn window_crosses_year_and_leap_day() {
        let window = DateWindow::trailing_week(date(2023, 1, 3)).unwrap();
        assert_eq!(window.labels()[0], "27/12/22");
        assert_eq!(window.labels()[6], "02/01/23");

        let leap = DateWindow::trailing_week(date(2024, 3, 2)).unwrap();
        assert!(leap.contains_label("29/02/24"));
    }

    #[test]
    fn parse_anchor_accepts_day_month_year() {
        assert_eq!(parse_anchor("02/01/2023").unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn parse_anchor_trims_line_terminators() {
        assert_eq!(parse_anchor("09/01/2023\r\n").unwrap(), date(2023, 1, 9));
        assert_eq!(parse_anchor("09/01/2023\n").unwrap(), date(2023, 1, 9));
    }

    #[test]
    fn parse_anchor_rejects_invalid_month() {
        let err = parse_anchor("31/13/2023").unwrap_err();
        assert!(matches!(err, InputError::InvalidDate { .. }));
    }

    #[test]
    fn parse_anchor_rejects_other_formats() {
        assert!(parse_anchor("2023-01-02").is_err());
        assert!(parse_anchor("").is_err());
        assert!(parse_anchor("30/02/2023").is_err());
        assert!(parse_anchor("09/01/23").is_err());
        assert!(parse_anchor("9/1/2023").is_err());
        assert!(parse_anchor(" 09/01/2023").is_err());
        assert!(parse_anchor("09/01/+2023").is_err());
    }

    #[test]
    fn parse_anchor_rejects_signed_years() {
        let err = parse_anchor("01/01/-262143").unwrap_err();
        assert!(matches!(err, InputError::InvalidDate { .. }));
    }

    #[test]
    fn earliest_four_digit_year_still_builds_a_window() {
        let anchor = parse_anchor("01/01/0000").unwrap();
        let window = DateWindow::trailing_week(anchor).unwrap();
        assert_eq!(window.len(), 7);
        assert_eq!(window.end(), anchor);
    }

    #[test]
    fn window_before_earliest_date_is_an_error() {
        let err = DateWindow::trailing_week(NaiveDate::MIN).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange(_)));
    }
}
