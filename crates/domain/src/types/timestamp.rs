//! Serde helpers for service timestamps
//!
//! Brood and Spire emit ISO-8601 timestamps both with an offset
//! (`2021-03-01T10:00:00+00:00`) and without one
//! (`2021-03-01T10:00:00.123456`). Offset-less values are UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Same as the parent module, for `Option<DateTime<Utc>>` fields.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse("2021-03-01T12:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn parses_naive_as_utc() {
        let ts = parse("2021-03-01T10:00:00.123456").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day(), ts.hour()), (2021, 3, 1, 10));
    }

    #[test]
    fn parses_space_separated() {
        assert!(parse("2021-03-01 10:00:00").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }
}
