//! Core domain logic for the task card screen.
//! This crate is the single source of truth for task and interval invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod screen;
pub mod view;

pub use config::{ConfigError, TaskTemplate};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::interval::{
    max_interval_span, Interval, InvalidIntervalError, MAX_INTERVAL_SPAN_SECS,
};
pub use model::task::{NewTask, Task, TaskId, STATUS_UNSCHEDULED};
pub use screen::observable::{ListChange, ObservableList, SubscriptionId};
pub use screen::task_list::{ScreenError, TaskListState};
pub use view::card::{TaskCardView, TOGGLE_LABEL_COMPACT, TOGGLE_LABEL_EXPAND};
pub use view::format::{
    format_clock, format_duration, format_effect, format_interval, DurationFormatError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
