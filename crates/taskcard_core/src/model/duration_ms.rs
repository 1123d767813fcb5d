//! Serde adapter storing a `TimeDelta` as signed integer milliseconds.
//!
//! Sub-millisecond precision is dropped on serialization.

use chrono::TimeDelta;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(value.num_milliseconds())
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = i64::deserialize(deserializer)?;
    TimeDelta::try_milliseconds(millis)
        .ok_or_else(|| D::Error::custom(format!("duration out of range: {millis} ms")))
}
