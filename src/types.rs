//! Core types for the attendance store.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::macros::format_description;
use time::OffsetDateTime;

/// The kind of attendance event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    TimeIn,
    TimeOut,
}

impl Action {
    /// Display label, also the literal stored in the `Action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::TimeIn => "Time In",
            Action::TimeOut => "Time Out",
        }
    }

    /// Parse a stored column value back into an action.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Time In" => Some(Action::TimeIn),
            "Time Out" => Some(Action::TimeOut),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attendance event, as written to the sheet.
///
/// Records are immutable once written; the store only ever appends them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local wall-clock time, `HH:MM:SS` (24-hour).
    pub time: String,
    pub action: Action,
}

impl AttendanceRecord {
    /// Build a record stamped from a single instant, so the date and time
    /// columns always reflect the same moment.
    pub fn stamped(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        action: Action,
        at: OffsetDateTime,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            date: format_date(at),
            time: format_time(at),
            action,
        }
    }

    /// The five cell values in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.employee_id,
            &self.name,
            &self.date,
            &self.time,
            self.action.as_str(),
        ]
    }
}

/// Successful outcome of a `record()` call, suitable for direct display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub action: Action,
    pub name: String,
    /// `HH:MM:SS` of the written row.
    pub time: String,
}

impl fmt::Display for Recorded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully recorded {} for {} at {}",
            self.action, self.name, self.time
        )
    }
}

/// Current local time, falling back to UTC when the local offset cannot
/// be determined.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Format the date column value (`YYYY-MM-DD`).
pub fn format_date(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day]"))
        .expect("date format is infallible")
}

/// Format the time column value (`HH:MM:SS`).
pub fn format_time(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour]:[minute]:[second]"))
        .expect("time format is infallible")
}
