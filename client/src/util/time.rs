//! Clock access and date display helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, NaiveDate, Utc};

const PLACEHOLDER: &str = "—";

/// Local calendar date, used for age and expiry arithmetic.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// `YYYY-MM-DD`, or a dash when unset.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| PLACEHOLDER.to_owned(), |d| d.format("%Y-%m-%d").to_string())
}

/// Local wall-clock time, or a dash when unset.
pub fn format_instant(instant: Option<DateTime<Utc>>) -> String {
    instant.map_or_else(
        || PLACEHOLDER.to_owned(),
        |t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}
