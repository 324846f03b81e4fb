//! Local date-time parsing
//!
//! Browsers submit `datetime-local` inputs without seconds
//! (`2022-02-02T00:00`), so timestamps accept both the full
//! `%Y-%m-%dT%H:%M:%S%.f` form and minute precision. Serialization keeps
//! chrono's default output.

use std::fmt;

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Visitor};

const MINUTE_PRECISION: &str = "%Y-%m-%dT%H:%M";

/// Parse an ISO-8601 local date-time with or without seconds
pub fn parse_local(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, MINUTE_PRECISION))
}

/// `deserialize_with` target for [`NaiveDateTime`] fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(LocalDateTimeVisitor)
}

struct LocalDateTimeVisitor;

impl Visitor<'_> for LocalDateTimeVisitor {
    type Value = NaiveDateTime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a local date-time such as 2022-02-02T00:00 or 2022-02-02T00:00:00")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<NaiveDateTime, E> {
        parse_local(value).map_err(|e| E::custom(format!("invalid date-time `{}`: {}", value, e)))
    }
}
