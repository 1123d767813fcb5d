//! Task domain model.
//!
//! # Responsibility
//! - Define the immutable record rendered as one card on the task screen.
//! - Compose exactly one validated [`Interval`].
//!
//! # Invariants
//! - `id` is stable for the task lifetime and keys per-card view state.
//! - `duration` is independent from `interval.span()` and never cross-checked.
//! - `name`, `duration` and `effect` are accepted as given.

use crate::model::interval::{Interval, InvalidIntervalError};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task and its card.
pub type TaskId = Uuid;

/// Default scheduling status shown for newly added tasks.
pub const STATUS_UNSCHEDULED: &str = "Unscheduled";

/// Unit of work scheduled within an interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    /// Free-text scheduling state. `None` when the screen shows no status.
    status: Option<String>,
    interval: Interval,
    /// Planned work time, serialized as `duration_ms`.
    #[serde(rename = "duration_ms", with = "crate::model::duration_ms")]
    duration: TimeDelta,
    /// Power draw in watts.
    effect: f64,
}

impl Task {
    /// Creates a task with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        status: Option<String>,
        interval: Interval,
        duration: TimeDelta,
        effect: f64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, status, interval, duration, effect)
    }

    /// Creates a task with a caller-provided ID.
    ///
    /// Used when identity already exists outside the core.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        status: Option<String>,
        interval: Interval,
        duration: TimeDelta,
        effect: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            interval,
            duration,
            effect,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn effect(&self) -> f64 {
        self.effect
    }
}

/// Request model for building a task from raw interval bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub status: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: TimeDelta,
    pub effect: f64,
}

impl NewTask {
    /// Validates the interval and builds the task.
    ///
    /// # Errors
    /// - Propagates [`InvalidIntervalError`] from interval construction.
    pub fn into_task(self) -> Result<Task, InvalidIntervalError> {
        let interval = Interval::new(self.start, self.end)?;
        Ok(Task::new(
            self.name,
            self.status,
            interval,
            self.duration,
            self.effect,
        ))
    }
}
