// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Day-granularity date handling. Items store full-precision timestamps but
//! are displayed and bucketed by calendar day; both the write path and
//! `today()` use the UTC clock so bucketing never drifts by a day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::LedgerError;

/// Truncate a timestamp to its date part by splitting at the first `T` or
/// space. A value with no separator is returned unchanged; this is a
/// deliberate leniency, not a validator, and callers needing a strict shape
/// must check the output themselves.
pub fn date_only(raw: &str) -> String {
    match raw.split_once(['T', ' ']) {
        Some((date, _)) => date.to_string(),
        None => raw.to_string(),
    }
}

/// Current instant, full precision, as stored in `created_at`.
pub fn now() -> String {
    Utc::now().to_rfc3339()
}

/// Today's day key, from the same clock as `now()`.
pub fn today() -> String {
    date_only(&now())
}

/// Month bucket for a normalized day key: the `YYYY-MM` prefix when the
/// value is shaped like a date, otherwise the value itself.
pub fn month_key(day: &str) -> String {
    match day.get(..7) {
        Some(prefix) if day.as_bytes().get(4) == Some(&b'-') => prefix.to_string(),
        _ => day.to_string(),
    }
}

/// Strict write-path check: a timestamp must be RFC 3339, a naive
/// `date T|space time`, or a bare date. Reads stay lenient per `date_only`.
pub fn parse_timestamp(raw: &str) -> Result<(), LedgerError> {
    let ok = DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok();
    if ok {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "Invalid timestamp '{}', expected RFC 3339 or YYYY-MM-DD",
            raw
        )))
    }
}

/// Month arguments must be a real `YYYY-MM` month, checked by pinning the
/// first day of that month to the calendar.
pub fn parse_month(raw: &str) -> Result<(), LedgerError> {
    NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            LedgerError::Validation(format!("Invalid month '{}', expected YYYY-MM", raw))
        })
}
