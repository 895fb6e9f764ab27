//! Date helpers: the local calendar day and the storage date encoding.
//!
//! Dates travel as ISO `YYYY-MM-DD` strings outside the store and as
//! `YYYYMMDD` integers inside it, so that range filters are plain integer
//! comparisons.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const STORAGE_FORMAT: &str = "%Y%m%d";

/// 9999-12-31, the last date with an 8-digit encoding.
pub const MAX_STORAGE_DATE: i64 = 99_991_231;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let d = NaiveDate::parse_from_str(s, ISO_FORMAT).ok()?;
    // chrono accepts unpadded fields ("2024-1-9"); the wire format does not
    (d.format(ISO_FORMAT).to_string() == s).then_some(d)
}

pub fn date_to_storage_int(date: NaiveDate) -> AppResult<i64> {
    if !(1000..=9999).contains(&date.year()) {
        return Err(AppError::encoding("date", date));
    }
    let s = date.format(STORAGE_FORMAT).to_string();
    s.parse::<i64>().map_err(|_| AppError::encoding("date", s))
}

pub fn iso_to_storage_int(iso: &str) -> AppResult<i64> {
    let date = parse_date(iso).ok_or_else(|| AppError::encoding("date", iso))?;
    date_to_storage_int(date)
}

pub fn storage_int_to_iso(value: i64) -> AppResult<String> {
    if !(10_000_000..=MAX_STORAGE_DATE).contains(&value) {
        return Err(AppError::encoding("stored date", value));
    }
    let date = NaiveDate::parse_from_str(&value.to_string(), STORAGE_FORMAT)
        .map_err(|_| AppError::encoding("stored date", value))?;
    Ok(date.format(ISO_FORMAT).to_string())
}
