//! Display formatting shared by both screens.
//!
//! Dates are rendered the way an `en-US` browser locale prints them
//! (`1/15/2024`, `1/15/2024, 9:05:00 AM`) and always in UTC, so the
//! facet labels computed here are stable regardless of where the dashboard
//! runs.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

use crate::model::person::NOT_AVAILABLE;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static camel-case pattern"));

/// Short locale date, e.g. `1/15/2024`.
pub fn locale_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Locale date and time, e.g. `1/15/2024, 9:05:00 AM`.
pub fn locale_date_time(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Renders a raw timestamp string as a locale date-time when it parses as
/// RFC 3339, otherwise returns it untouched.
pub fn timestamp_text(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => locale_date_time(&at.with_timezone(&Utc)),
        Err(_) => raw.to_string(),
    }
}

/// Turns a form field key into a label: `graduationYear` -> `Graduation Year`.
pub fn de_camel_case(key: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(key, "$1 $2").replace('_', " ");
    capitalize_first(spaced.trim())
}

/// Uppercases the first character and leaves the rest as is.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// String form of a free-form answer value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}
