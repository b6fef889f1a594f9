//! Best-effort field deserializers.
//!
//! The remote JSON has no schema. These helpers accept whatever scalar shows
//! up in a field and degrade anything unusable to "absent" instead of
//! failing the whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::ids::RecordId;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(v) => Some(v.to_string()),
            Self::Unsigned(v) => Some(v.to_string()),
            Self::Signed(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Other(_) => None,
        }
    }
}

/// Optional text: strings pass through, other scalars are stringified,
/// `null` and structured values become `None`.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Required text that falls back to the empty string.
pub fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Record id. Scalars become their text form; `null` and structured values
/// become the empty id so the record is kept.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
    Ok(text(deserializer)?.map(RecordId::from).unwrap_or_default())
}

/// Reference to another record. Anything that is not a scalar is `None`.
pub fn optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RecordId>, D::Error> {
    Ok(text(deserializer)?.map(RecordId::from))
}

/// Optional timestamp. Strings go through [`parse_timestamp`]; integers are
/// epoch milliseconds. Anything else is `None`.
pub fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let parsed = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => parse_timestamp(&text),
        Some(Scalar::Unsigned(ms)) => i64::try_from(ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis),
        Some(Scalar::Signed(ms)) => DateTime::from_timestamp_millis(ms),
        _ => None,
    };
    Ok(parsed)
}

/// Parse the timestamp shapes seen in the task documents.
///
/// Accepts RFC 3339, naive `T`- or space-separated date-times (taken as UTC),
/// and bare dates (midnight UTC).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
