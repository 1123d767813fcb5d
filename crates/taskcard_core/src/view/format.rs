//! Display formatting for task cards.
//!
//! # Invariants
//! - Clock times are always rendered in UTC, independent of host timezone.
//! - Durations render as zero-padded `HH:mm` and truncate (never round).
//! - Hours are not wrapped at 24.

use crate::model::interval::Interval;
use chrono::{DateTime, TimeDelta, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLOCK_PATTERN: &str = "%H:%M";
const MIN_PLAIN_DECIMAL: f64 = 1e-3;
const MAX_PLAIN_DECIMAL: f64 = 1e7;

/// Duration formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationFormatError {
    Negative { millis: i64 },
}

impl Display for DurationFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative { millis } => {
                write!(f, "duration must not be negative, got {millis} ms")
            }
        }
    }
}

impl Error for DurationFormatError {}

/// Renders an instant as 24-hour `HH:mm` in UTC.
pub fn format_clock(instant: DateTime<Utc>) -> String {
    instant.format(CLOCK_PATTERN).to_string()
}

/// Renders interval bounds as `HH:mm - HH:mm`.
pub fn format_interval(interval: &Interval) -> String {
    format!(
        "{} - {}",
        format_clock(interval.start()),
        format_clock(interval.end())
    )
}

/// Renders a duration as zero-padded `HH:mm`.
///
/// # Errors
/// - Returns [`DurationFormatError::Negative`] for durations below zero.
pub fn format_duration(duration: TimeDelta) -> Result<String, DurationFormatError> {
    if duration < TimeDelta::zero() {
        return Err(DurationFormatError::Negative {
            millis: duration.num_milliseconds(),
        });
    }
    let total_minutes = duration.num_minutes();
    Ok(format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60))
}

/// Renders an effect magnitude in watts, e.g. `1000.0W`.
pub fn format_effect(watts: f64) -> String {
    format!("{}W", format_decimal(watts))
}

// Mirrors JVM `Double.toString`: plain notation in [1e-3, 1e7) with at least
// one fractional digit, `1.0E7` style scientific notation outside it.
fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return label.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || (MIN_PLAIN_DECIMAL..MAX_PLAIN_DECIMAL).contains(&magnitude) {
        let plain = format!("{value}");
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
