use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::error::MetricsError;
use crate::domain::weather::{parse_date, parse_datetime};

const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday name for a `YYYY-MM-DD` date string, computed with the
/// classic congruence rather than a calendar lookup.
pub fn day_of_week(date: &str) -> Result<&'static str, MetricsError> {
    Ok(weekday_name(parse_date_checked(date)?))
}

#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[weekday_index(date.year(), date.month(), date.day())]
}

/// Congruence weekday index, 0 = Sunday. January and February borrow the
/// previous year so the century and leap corrections line up.
fn weekday_index(year: i32, month: u32, day: u32) -> usize {
    let adjusted = if month < 3 { year - 1 } else { year };
    let sum = adjusted + adjusted / 4 - adjusted / 100 + adjusted / 400
        + MONTH_OFFSETS[(month - 1) as usize]
        + day as i32;
    sum.rem_euclid(7) as usize
}

/// "5 Mar" style short date: day without leading zero, three-letter month.
pub fn format_short_date(date: &str) -> Result<String, MetricsError> {
    Ok(short_date(parse_date_checked(date)?))
}

#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Full timestamp line, e.g. "Tuesday, March 5, 2024, 2:30 PM".
pub fn format_long_date(datetime: &str) -> Result<String, MetricsError> {
    Ok(long_date(parse_datetime_checked(datetime)?))
}

#[must_use]
pub fn long_date(datetime: NaiveDateTime) -> String {
    datetime.format("%A, %B %-d, %Y, %-I:%M %p").to_string()
}

/// Row label for the daily list: the first row is always "Today".
#[must_use]
pub fn day_label(date: NaiveDate, index: usize) -> &'static str {
    if index == 0 {
        "Today"
    } else {
        weekday_name(date)
    }
}

/// "2:05 PM" style clock, used on the wind card.
#[must_use]
pub fn clock_12h(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// "06:43" style clock, used on the sunrise/sunset card.
#[must_use]
pub fn clock_24h(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

fn parse_date_checked(value: &str) -> Result<NaiveDate, MetricsError> {
    parse_date(value).ok_or_else(|| MetricsError::InvalidDate(value.to_string()))
}

fn parse_datetime_checked(value: &str) -> Result<NaiveDateTime, MetricsError> {
    parse_datetime(value).ok_or_else(|| MetricsError::InvalidDate(value.to_string()))
}
