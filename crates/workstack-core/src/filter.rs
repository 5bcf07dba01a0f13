//! Completed/cancelled filter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DateWindow, Record};

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Start-date formats understood by [`MatchMode::Calendar`], tried in order.
///
/// The two-digit year goes first: `%Y` would read `23` as year 23 AD.
const CALENDAR_FORMATS: [&str; 3] = ["%d/%m/%y", "%d/%m/%Y", "%Y-%m-%d"];

/// How a record's start date is compared against the window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Byte-for-byte equality with one of the window labels
    #[default]
    Exact,
    /// Parse the start date and test calendar membership
    Calendar,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "calendar" => Ok(Self::Calendar),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'exact' or 'calendar')"
            )),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

/// Whether the status is one the weekly report lists (case-sensitive)
pub fn is_closed_status(status: &str) -> bool {
    status == STATUS_COMPLETED || status == STATUS_CANCELLED
}

/// Parse a tracker start date in any of the calendar formats
pub fn parse_start_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    CALENDAR_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Whether the record belongs in the weekly report
pub fn is_reportable(record: &Record, window: &DateWindow, mode: MatchMode) -> bool {
    if !is_closed_status(&record.status) {
        return false;
    }

    match mode {
        MatchMode::Exact => window.contains_label(&record.start_date),
        MatchMode::Calendar => {
            parse_start_date(&record.start_date).is_some_and(|date| window.contains_date(date))
        }
    }
}
