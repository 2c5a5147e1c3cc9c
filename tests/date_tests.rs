// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tallybook::date;

#[test]
fn truncates_at_t_separator() {
    assert_eq!(date::date_only("2024-05-20T12:34:56"), "2024-05-20");
    assert_eq!(date::date_only("2024-05-20T12:34:56+00:00"), "2024-05-20");
}

#[test]
fn truncates_at_space_separator() {
    assert_eq!(date::date_only("2024-05-20 12:34:56"), "2024-05-20");
}

#[test]
fn value_without_separator_passes_through_unchanged() {
    assert_eq!(date::date_only("2024-05-20"), "2024-05-20");
    assert_eq!(date::date_only("not-a-date"), "not-a-date");
    assert_eq!(date::date_only(""), "");
}

#[test]
fn today_is_a_day_key() {
    let today = date::today();
    assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
}

#[test]
fn month_key_is_the_date_prefix() {
    assert_eq!(date::month_key("2024-05-20"), "2024-05");
    assert_eq!(date::month_key("2024-05"), "2024-05");
}

#[test]
fn month_key_of_unshaped_value_is_the_value() {
    assert_eq!(date::month_key("garbage"), "garbage");
    assert_eq!(date::month_key(""), "");
    assert_eq!(date::month_key("20240520T12"), "20240520T12");
}

#[test]
fn timestamp_check_accepts_supported_shapes() {
    for raw in [
        "2024-05-20T12:34:56Z",
        "2024-05-20T12:34:56+08:00",
        "2024-05-20T12:34:56",
        "2024-05-20 12:34:56",
        "2024-05-20",
    ] {
        assert!(date::parse_timestamp(raw).is_ok(), "rejected '{}'", raw);
    }
}

#[test]
fn timestamp_check_rejects_everything_else() {
    for raw in ["", "yesterday", "2024/05/20", "2024-13-01", "20:15"] {
        assert!(date::parse_timestamp(raw).is_err(), "accepted '{}'", raw);
    }
}

#[test]
fn month_check_requires_a_real_month() {
    assert!(date::parse_month("2024-05").is_ok());
    assert!(date::parse_month("2024-13").is_err());
    assert!(date::parse_month("2024").is_err());
    assert!(date::parse_month("May 2024").is_err());
}
