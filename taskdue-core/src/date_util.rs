use chrono::{NaiveDate, NaiveTime, Utc};

use crate::constants::{DATE_FORMAT, TIME_FORMAT};
use crate::{Result, TaskdueError};

/// Current date at the tracker's fixed UTC+0 offset
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a `YYYY-MM-DD` token. Calendar-invalid dates (day 31 in a 30-day
/// month, Feb 30, and so on) fail along with malformed shapes.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .map_err(|_| TaskdueError::Parse(format!("invalid date: {}", date_str.trim())))
}

/// Parses an `HH:MM` token, rejecting out-of-range hours and minutes
pub fn parse_time(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str.trim(), TIME_FORMAT)
        .map_err(|_| TaskdueError::Parse(format!("invalid time: {}", time_str.trim())))
}
