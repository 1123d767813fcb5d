//! Card projection of a task.
//!
//! # Responsibility
//! - Derive the text lines a UI shows for one task card.
//! - Keep formatting derived; nothing here is stored on the task.
//!
//! # Invariants
//! - Collapsed cards show the status and a schedule line.
//! - Expanded cards show only the labelled detail lines.

use crate::model::task::{Task, TaskId};
use crate::view::format::{format_duration, format_effect, format_interval, DurationFormatError};

/// Accessible label for the toggle of a collapsed card.
pub const TOGGLE_LABEL_EXPAND: &str = "Expand";
/// Accessible label for the toggle of an expanded card.
pub const TOGGLE_LABEL_COMPACT: &str = "Compact";

/// Text content of one rendered task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCardView {
    pub task_id: TaskId,
    pub title: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
    /// Lines under the title while collapsed.
    pub summary_lines: Vec<String>,
    /// Lines in the detail section while expanded.
    pub detail_lines: Vec<String>,
}

impl TaskCardView {
    /// Renders a task in collapsed or expanded form.
    ///
    /// # Errors
    /// - Returns [`DurationFormatError`] when the planned duration is negative.
    pub fn render(task: &Task, expanded: bool) -> Result<Self, DurationFormatError> {
        let interval = format_interval(task.interval());
        let duration = format_duration(task.duration())?;

        let mut summary_lines = Vec::new();
        let mut detail_lines = Vec::new();
        if expanded {
            if let Some(status) = task.status() {
                detail_lines.push(format!("Status: {status}"));
            }
            detail_lines.push(format!("Interval: {interval}"));
            detail_lines.push(format!("Duration: {duration}"));
            detail_lines.push(format!("Effect: {}", format_effect(task.effect())));
        } else {
            if let Some(status) = task.status() {
                summary_lines.push(status.to_string());
            }
            summary_lines.push(format!("{interval} ({duration})"));
        }

        Ok(Self {
            task_id: task.id(),
            title: task.name().to_string(),
            expanded,
            toggle_label: if expanded {
                TOGGLE_LABEL_COMPACT
            } else {
                TOGGLE_LABEL_EXPAND
            },
            summary_lines,
            detail_lines,
        })
    }
}
