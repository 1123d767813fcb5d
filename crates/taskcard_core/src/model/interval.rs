//! Interval domain model.
//!
//! # Responsibility
//! - Represent an immutable UTC time span owned by a task.
//! - Reject spans longer than one day at construction time.
//!
//! # Invariants
//! - `end - start <= 24h`, compared at nanosecond resolution.
//! - A span of exactly 24 hours is accepted.
//! - `end >= start` is NOT enforced; negative spans are constructible.
//! - Fields are private; an `Interval` never changes after construction.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest accepted interval span, in seconds (one day).
pub const MAX_INTERVAL_SPAN_SECS: i64 = 86_400;

/// Returns the longest accepted interval span.
pub fn max_interval_span() -> TimeDelta {
    TimeDelta::seconds(MAX_INTERVAL_SPAN_SECS)
}

/// Immutable time span between two UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRecord", into = "IntervalRecord")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    /// - Returns [`InvalidIntervalError`] when `end - start` exceeds 24 hours.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidIntervalError> {
        let span = end - start;
        if span > max_interval_span() {
            debug!(
                "event=interval_rejected module=model status=error span_ms={}",
                span.num_milliseconds()
            );
            return Err(InvalidIntervalError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Signed length of the interval. Negative when `end < start`.
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Returned when an interval span is longer than 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIntervalError {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl InvalidIntervalError {
    /// Span of the rejected input.
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl Display for InvalidIntervalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "interval greater than 24 hours: {} .. {}",
            self.start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.end.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

impl Error for InvalidIntervalError {}

/// Unvalidated wire shape. Deserialization goes through `Interval::new`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct IntervalRecord {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalRecord> for Interval {
    type Error = InvalidIntervalError;

    fn try_from(value: IntervalRecord) -> Result<Self, Self::Error> {
        Interval::new(value.start, value.end)
    }
}

impl From<Interval> for IntervalRecord {
    fn from(value: Interval) -> Self {
        Self {
            start: value.start,
            end: value.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{max_interval_span, Interval};
    use chrono::{TimeDelta, TimeZone, Utc};

    #[test]
    fn span_is_end_minus_start() {
        let start = Utc.with_ymd_and_hms(2024, 2, 24, 14, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 24, 18, 0, 0).unwrap();
        let interval = Interval::new(start, end).unwrap();
        assert_eq!(interval.span(), TimeDelta::hours(4));
    }

    #[test]
    fn one_nanosecond_over_limit_is_rejected() {
        let start = Utc.with_ymd_and_hms(2024, 2, 24, 0, 0, 0).unwrap();
        let end = start + max_interval_span() + TimeDelta::nanoseconds(1);
        let err = Interval::new(start, end).unwrap_err();
        assert_eq!(err.span(), TimeDelta::days(1) + TimeDelta::nanoseconds(1));
    }

    #[test]
    fn error_message_names_both_bounds() {
        let start = Utc.with_ymd_and_hms(2024, 2, 24, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 25, 0, 0, 1).unwrap();
        let message = Interval::new(start, end).unwrap_err().to_string();
        assert_eq!(
            message,
            "interval greater than 24 hours: 2024-02-24T00:00:00Z .. 2024-02-25T00:00:01Z"
        );
    }
}
