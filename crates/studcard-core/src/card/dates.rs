//! `DD.MM.YYYY` date parsing for card text.

use chrono::NaiveDate;

use super::Result;
use crate::error::ExtractionError;

/// Parse a `DD.MM.YYYY` date as printed on the card.
///
/// The printed month is 1-based and so is chrono's, so the month component
/// is passed through unchanged: `15.09.2021` is day 15, September, 2021.
/// Calendar-invalid triples (`31.02.2023`) are rejected rather than rolled
/// over into the following month.
pub fn parse_card_date(value: &str) -> Result<NaiveDate> {
    let malformed = |reason: &str| ExtractionError::MalformedDate {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = value.trim().split('.').map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed("expected three dot-separated components"));
    };

    let day: u32 = day.parse().map_err(|_| malformed("day is not a number"))?;
    let month: u32 = month.parse().map_err(|_| malformed("month is not a number"))?;
    let year: i32 = year.parse().map_err(|_| malformed("year is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| malformed("not a calendar date"))
}
