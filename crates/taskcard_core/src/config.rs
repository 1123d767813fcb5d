//! Task template configuration for the "add task" action.
//!
//! # Responsibility
//! - Hold the defaults used when the screen appends a task.
//! - Parse JSON overrides supplied by the UI runtime.
//!
//! # Invariants
//! - The template interval and duration are validated while parsing; an
//!   over-long span or a negative duration is a config error, so tasks built
//!   from a parsed template always render.
//! - Missing JSON fields fall back to [`TaskTemplate::default`].

use crate::model::interval::Interval;
use crate::model::task::{Task, STATUS_UNSCHEDULED};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_NAME_PREFIX: &str = "My Task";
const DEFAULT_EFFECT_WATTS: f64 = 1000.0;
const DEFAULT_DURATION_HOURS: i64 = 2;
/// 2024-02-24T14:00:00Z
const DEFAULT_START_EPOCH_SECS: i64 = 1_708_783_200;
const DEFAULT_SPAN_HOURS: i64 = 4;

/// Template for tasks appended by the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskTemplate {
    /// Name prefix; the list position is appended (`"My Task 0"`).
    pub name_prefix: String,
    pub status: Option<String>,
    pub interval: Interval,
    #[serde(rename = "duration_ms", with = "crate::model::duration_ms")]
    pub duration: TimeDelta,
    pub effect: f64,
}

impl Default for TaskTemplate {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            status: Some(STATUS_UNSCHEDULED.to_string()),
            interval: default_interval(),
            duration: TimeDelta::hours(DEFAULT_DURATION_HOURS),
            effect: DEFAULT_EFFECT_WATTS,
        }
    }
}

fn default_interval() -> Interval {
    DateTime::<Utc>::from_timestamp(DEFAULT_START_EPOCH_SECS, 0)
        .and_then(|start| {
            Interval::new(start, start + TimeDelta::hours(DEFAULT_SPAN_HOURS)).ok()
        })
        .expect("default template interval is a constant 4h span")
}

impl TaskTemplate {
    /// Parses a template from JSON.
    ///
    /// # Errors
    /// - Returns [`ConfigError::Json`] for malformed JSON, wrong field types or
    ///   an interval longer than 24 hours.
    /// - Returns [`ConfigError::NegativeDuration`] for a duration below zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let template: Self = serde_json::from_str(raw).map_err(ConfigError::Json)?;
        template.validate()?;
        Ok(template)
    }

    /// Checks fields serde cannot reject on its own.
    ///
    /// # Errors
    /// - Returns [`ConfigError::NegativeDuration`] for a duration below zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration < TimeDelta::zero() {
            return Err(ConfigError::NegativeDuration {
                millis: self.duration.num_milliseconds(),
            });
        }
        Ok(())
    }

    /// Builds the task shown at list position `index`.
    pub fn instantiate(&self, index: usize) -> Task {
        Task::new(
            format!("{} {index}", self.name_prefix),
            self.status.clone(),
            self.interval,
            self.duration,
            self.effect,
        )
    }
}

/// Configuration parse errors.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    NegativeDuration { millis: i64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid task template: {err}"),
            Self::NegativeDuration { millis } => write!(
                f,
                "invalid task template: duration must not be negative, got {millis} ms"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NegativeDuration { .. } => None,
        }
    }
}
