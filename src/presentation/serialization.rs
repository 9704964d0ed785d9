/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Serde helpers for the RelateIQ wire formats.
//!
//! Each helper is attached to individual fields with `#[serde(with = "...")]`,
//! `serialize_with` or `deserialize_with`; nothing here changes how chrono or serde
//! behave globally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Converts a timestamp into whole milliseconds since the Unix epoch.
///
/// Sub-millisecond precision is floored away.
pub fn to_epoch_millis(time: &DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Converts milliseconds since the Unix epoch into a UTC timestamp.
///
/// Returns `None` when the value is outside the range chrono can represent.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Returns true for the zero value, used to omit unset numeric options
pub fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Timestamps encoded as an integer number of milliseconds since the Unix epoch.
///
/// The wire value carries no zone, so decoding always yields UTC whatever zone
/// the timestamp was produced in.
pub mod epoch_millis {
    use super::{from_epoch_millis, to_epoch_millis};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a timestamp as epoch milliseconds
    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(to_epoch_millis(time))
    }

    /// Deserializes epoch milliseconds into a UTC timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        from_epoch_millis(millis)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis} ms")))
    }
}

/// Optional timestamps encoded as epoch milliseconds, `null` when absent
pub mod epoch_millis_opt {
    use super::{from_epoch_millis, to_epoch_millis};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional timestamp as epoch milliseconds or `null`
    pub fn serialize<S>(time: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_some(&to_epoch_millis(time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes optional epoch milliseconds into a UTC timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            Some(millis) => from_epoch_millis(millis)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis} ms"))),
            None => Ok(None),
        }
    }
}

/// A list of strings encoded as a single comma-joined value, as the API expects
/// for multi-valued query parameters.
pub mod comma_separated {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Joins the values with commas
    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&values.join(","))
    }

    /// Splits a comma-joined value, an empty string yields an empty list
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let joined = String::deserialize(deserializer)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        Ok(joined.split(',').map(str::to_string).collect())
    }
}

/// Strings that must not be empty, such as resource identifiers
pub mod non_empty_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    /// Deserializes a string, rejecting the empty string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(D::Error::custom("expected a non-empty string"));
        }
        Ok(value)
    }
}

/// Deserializes a list that the API may send as `null`, yielding an empty vector
pub fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
