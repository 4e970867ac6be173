//! Wire format for article dates: UTC rendered as `yyyy-MM-dd HH:mm:ss`.
//!
//! Use with `#[serde(with = "wire_date")]`. Input in the same format is read
//! as UTC; RFC 3339 input with an explicit offset is accepted and converted.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    match NaiveDateTime::parse_from_str(raw, FORMAT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(err) => DateTime::parse_from_rfc3339(raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|_| err),
    }
}
