//! Serde adapter for optional record timestamps.
//!
//! Written as RFC 3339 text. Read from RFC 3339 text or from unix seconds
//! (integer or fractional), which is how CBOR peers commonly encode times.
//! Empty strings and nulls read as `None`.

use std::fmt::{self, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Serialize an optional timestamp as RFC 3339 text.
///
/// # Errors
///
/// Propagates serializer failures.
#[allow(clippy::ref_option)]
pub fn serialize<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(time) => serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional timestamp from text or unix seconds.
///
/// # Errors
///
/// Fails on malformed text or out-of-range numbers.
pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    deserializer.deserialize_any(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Option<DateTime<Utc>>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("an RFC 3339 timestamp or unix seconds")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(Self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(value)
            .map(|time| Some(time.with_timezone(&Utc)))
            .map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        DateTime::from_timestamp(value, 0)
            .map(Some)
            .ok_or_else(|| E::custom("timestamp out of range"))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let seconds = i64::try_from(value).map_err(|_| E::custom("timestamp out of range"))?;
        self.visit_i64(seconds)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() {
            return Err(E::custom("timestamp out of range"));
        }
        let seconds = value.floor();
        let nanos = ((value - seconds) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::from_timestamp(seconds as i64, nanos)
            .map(Some)
            .ok_or_else(|| E::custom("timestamp out of range"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super", skip_serializing_if = "Option::is_none")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn reads_text_and_numbers() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single();
        let text: Stamped = serde_json::from_str(r#"{"at":"2024-05-01T12:00:00Z"}"#).expect("text");
        let number: Stamped = serde_json::from_str(r#"{"at":1714564800}"#).expect("number");
        let float: Stamped = serde_json::from_str(r#"{"at":1714564800.0}"#).expect("float");
        assert_eq!(text.at, expected);
        assert_eq!(number.at, expected);
        assert_eq!(float.at, expected);
    }

    #[test]
    fn null_empty_and_missing_read_as_none() {
        for raw in [r#"{"at":null}"#, r#"{"at":""}"#, "{}"] {
            let stamped: Stamped = serde_json::from_str(raw).expect("decode");
            assert_eq!(stamped.at, None, "{raw}");
        }
    }

    #[test]
    fn writes_rfc3339() {
        let stamped = Stamped {
            at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single(),
        };
        assert_eq!(
            serde_json::to_string(&stamped).expect("encode"),
            r#"{"at":"2024-05-01T12:00:00Z"}"#
        );
    }
}
