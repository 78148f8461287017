//! Week/weekday to calendar date arithmetic.
//!
//! T051: Implement placement of (week, weekday) coordinates onto dates
//!
//! Plans address workouts by a (week number, weekday name) coordinate
//! relative to an anchor start date; this module resolves those coordinates
//! to absolute calendar dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

/// Errors from resolving a placement coordinate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Weekday name not recognized; placement never defaults to a day.
    #[error("unknown weekday name: {0}")]
    UnknownWeekday(String),

    /// Anchor date string not parseable as YYYY-MM-DD.
    #[error("invalid anchor date: {0}")]
    InvalidDate(String),
}

/// Day offset from the week's Monday.
///
/// Sunday maps to the day BEFORE the week's Monday, not the day after
/// Saturday. Downstream consumers depend on this legacy mapping; change it
/// only together with them.
const fn weekday_offset(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => -1,
    }
}

/// Parse a full weekday name, case-insensitively.
pub fn parse_weekday(name: &str) -> Result<Weekday, ScheduleError> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(ScheduleError::UnknownWeekday(name.to_string())),
    }
}

/// Monday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Parse a YYYY-MM-DD anchor date string.
pub fn parse_anchor(value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(value.to_string()))
}

/// Resolve a (week, weekday) plan coordinate to an absolute date.
///
/// The anchor is normalized to the Monday of its week first, so any anchor
/// within the same calendar week yields the same placements. Week numbers
/// are 1-based.
pub fn placement_date(
    anchor: NaiveDate,
    week_number: u32,
    weekday: &str,
) -> Result<NaiveDate, ScheduleError> {
    let target = parse_weekday(weekday)?;
    let monday = week_start(anchor) + Duration::weeks(i64::from(week_number) - 1);
    let date = monday + Duration::days(weekday_offset(target));

    tracing::debug!(%date, week = week_number, weekday, "resolved placement");

    Ok(date)
}
