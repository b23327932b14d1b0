use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::row::{cell, leading_int};
use crate::api::RawRow;

/// `month_num` for a month code that could not be recognized.
pub const UNKNOWN_MONTH: i32 = -1;

const MONTH_CODES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE", "JULY", "AUGUST", "SEPTEMBER",
    "OCTOBER", "NOVEMBER", "DECEMBER",
];

/// Day of the month as the sheet gave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleDay {
    Number(i32),
    /// Shown verbatim; such a show cannot be dated ("TBD")
    Text(String),
}

impl ScheduleDay {
    /// A leading non-zero integer ("5", "5th") is a number; anything else
    /// is kept as text.
    pub fn parse(text: &str) -> Self {
        match leading_int(text) {
            Some(n) if n != 0 => ScheduleDay::Number(n),
            _ => ScheduleDay::Text(text.to_string()),
        }
    }

    pub fn number(&self) -> Option<i32> {
        match self {
            ScheduleDay::Number(n) => Some(*n),
            ScheduleDay::Text(_) => None,
        }
    }
}

impl From<i32> for ScheduleDay {
    fn from(day: i32) -> Self {
        ScheduleDay::Number(day)
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleDay::Number(n) => f.pad(&n.to_string()),
            ScheduleDay::Text(text) => f.pad(text),
        }
    }
}

/// One show on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub year: i32,
    pub day: ScheduleDay,
    /// Uppercased month code, e.g. "MAR"
    pub month: String,
    /// 0-11, or `UNKNOWN_MONTH`
    pub month_num: i32,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time: String,
}

/// Zero-based month index for a code such as "mar", "March" or "SEPT".
/// Anything of at least three letters that prefixes a month name counts.
pub fn month_index(text: &str) -> i32 {
    let upper = text.trim().to_uppercase();
    if upper.len() < 3 {
        return UNKNOWN_MONTH;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&upper))
        .map(|i| i as i32)
        .unwrap_or(UNKNOWN_MONTH)
}

impl ScheduleEntry {
    /// Build an entry from a sheet row. Rows without a day or title are rejected.
    pub fn from_row(row: &RawRow, today: NaiveDate) -> Option<Self> {
        let day_text = cell(row, "day")?;
        let title = cell(row, "title")?;

        let day = ScheduleDay::parse(&day_text);
        if day.number().is_none() {
            debug!(day = %day_text, title = %title, "Schedule row has an undated day");
        }

        let year = cell(row, "year")
            .and_then(|y| leading_int(&y))
            .unwrap_or_else(|| today.year());

        let raw_month = cell(row, "month").unwrap_or_default().to_uppercase();
        let month_num = month_index(&raw_month);
        let month = if month_num == UNKNOWN_MONTH {
            raw_month
        } else {
            MONTH_CODES[month_num as usize].to_string()
        };

        Some(Self {
            year,
            day,
            month,
            month_num,
            title,
            location: cell(row, "location").unwrap_or_default(),
            time: cell(row, "time").unwrap_or_default(),
        })
    }

    pub fn has_known_month(&self) -> bool {
        (0..12).contains(&self.month_num)
    }

    /// The calendar date of the show. Days past the end of the month roll
    /// over into the next one ("FEB 30" is March 1 or 2).
    pub fn date(&self) -> Option<NaiveDate> {
        if !self.has_known_month() {
            return None;
        }
        let day = self.day.number()?;
        let first = NaiveDate::from_ymd_opt(self.year, self.month_num as u32 + 1, 1)?;
        first.checked_add_signed(Duration::days(i64::from(day) - 1))
    }

    /// Strictly before `today`. Entries that cannot be dated are never past.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date().map(|date| date < today).unwrap_or(false)
    }
}

/// Normalize sheet rows into upcoming schedule entries, in sheet order.
pub fn normalize_schedule(rows: &[RawRow], today: NaiveDate) -> Vec<ScheduleEntry> {
    rows.iter()
        .filter_map(|row| ScheduleEntry::from_row(row, today))
        .filter(|entry| !entry.is_past(today))
        .collect()
}
