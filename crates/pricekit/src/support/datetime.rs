//! Date-time parsing and formatting in the service's wire format.
//!
//! All timestamps exchanged with the rest of the pricing service are local
//! times without an offset, written as [`DEFAULT_DATE_FORMAT`].

use chrono::{Local, NaiveDateTime, TimeDelta};

use crate::{Error, Result};

/// `yyyy-MM-dd HH:mm:ss`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// [`DEFAULT_DATE_FORMAT`] with optional fractional seconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Current local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local time shifted by `days` whole days (negative goes back).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the result is out of range.
pub fn add_days(days: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_days(days)
        .and_then(|delta| now().checked_add_signed(delta))
        .ok_or_else(|| Error::invalid_argument(format!("{days} days is out of range")))
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Parses a date-time written in [`DEFAULT_DATE_FORMAT`].
///
/// # Errors
///
/// Returns [`Error::DateTime`] if `value` does not match the format.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, DEFAULT_DATE_FORMAT)?)
}

/// Parses a database timestamp: [`DEFAULT_DATE_FORMAT`] optionally followed
/// by fractional seconds (`2017-01-05 10:20:30.125`).
///
/// # Errors
///
/// Returns [`Error::DateTime`] if `value` does not match the format.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

/// Serde adapter that writes `NaiveDateTime` fields in
/// [`DEFAULT_DATE_FORMAT`].
///
/// ```
/// use chrono::NaiveDateTime;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Quote {
///     #[serde(with = "pricekit::support::datetime::default_format")]
///     updated: NaiveDateTime,
/// }
/// ```
pub mod default_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::DEFAULT_DATE_FORMAT;

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DEFAULT_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DEFAULT_DATE_FORMAT).map_err(de::Error::custom)
    }
}
