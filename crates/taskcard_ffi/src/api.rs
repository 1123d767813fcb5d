//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task screen state and interval validation to Dart via FRB.
//! - Flatten core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - At most one screen is mounted per process.
//! - The screen lock is never held across calls.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use taskcard_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, Interval, TaskCardView, TaskId, TaskListState,
    TaskTemplate,
};

static SCREEN: Mutex<Option<TaskListState>> = Mutex::new(None);

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Returns the recommended log level for the current build mode.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic response envelope for screen lifecycle and card actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActionResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Affected task ID, when the action targets one card.
    pub task_id: Option<String>,
    /// New expanded flag after a toggle.
    pub expanded: Option<bool>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ScreenActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            task_id: None,
            expanded: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            expanded: None,
            message: message.into(),
        }
    }
}

/// One rendered card for the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// Stable task ID in string form; use as the list item key.
    pub task_id: String,
    /// Task name shown as the card title.
    pub title: String,
    /// Whether the detail section is visible.
    pub expanded: bool,
    /// Accessible label for the toggle (`Expand` or `Compact`).
    pub toggle_label: String,
    /// Status and schedule lines shown while collapsed.
    pub summary_lines: Vec<String>,
    /// Labelled detail lines shown while expanded.
    pub detail_lines: Vec<String>,
}

/// Card list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListResponse {
    /// Whether the cards could be rendered.
    pub ok: bool,
    /// Cards in list order (empty on failure).
    pub items: Vec<CardItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Interval validation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalCheckResponse {
    /// Whether the interval would be accepted.
    pub ok: bool,
    /// Signed span in milliseconds when both bounds parse.
    pub span_ms: Option<i64>,
    /// Acceptance note or the validation error.
    pub message: String,
}

/// Mounts the task screen.
///
/// `template_json` overrides the "add task" defaults; `None` or blank uses
/// the built-in template.
///
/// # FFI contract
/// - Fails when a screen is already mounted or the template is invalid.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_mount(template_json: Option<String>) -> ScreenActionResponse {
    let template = match template_json.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match TaskTemplate::from_json(raw) {
            Ok(template) => template,
            Err(err) => return ScreenActionResponse::failure(format!("screen_mount failed: {err}")),
        },
        _ => TaskTemplate::default(),
    };

    let mut guard = match SCREEN.lock() {
        Ok(guard) => guard,
        Err(_) => return ScreenActionResponse::failure("screen_mount failed: state lock poisoned"),
    };
    if guard.is_some() {
        return ScreenActionResponse::failure("screen_mount failed: screen already mounted");
    }
    *guard = Some(TaskListState::mount(template));
    ScreenActionResponse::success("Screen mounted.")
}

/// Unmounts the task screen and drops all list and card state.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_unmount() -> ScreenActionResponse {
    let mut guard = match SCREEN.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return ScreenActionResponse::failure("screen_unmount failed: state lock poisoned")
        }
    };
    match guard.take() {
        Some(state) => {
            state.unmount();
            ScreenActionResponse::success("Screen unmounted.")
        }
        None => ScreenActionResponse::failure("screen_unmount failed: screen is not mounted"),
    }
}

/// Appends a task built from the mounted template.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_add_task() -> ScreenActionResponse {
    match with_screen(|state| Ok(state.add_from_template())) {
        Ok(task_id) => ScreenActionResponse {
            task_id: Some(task_id.to_string()),
            ..ScreenActionResponse::success("Task added.")
        },
        Err(err) => ScreenActionResponse::failure(format!("screen_add_task failed: {err}")),
    }
}

/// Toggles the expanded flag of one card.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_toggle_card(task_id: String) -> ScreenActionResponse {
    let result = with_screen(|state| {
        let id = parse_task_id(task_id.as_str())?;
        let expanded = state
            .toggle_expanded(id)
            .ok_or_else(|| format!("card not found: {id}"))?;
        Ok((id, expanded))
    });
    match result {
        Ok((id, expanded)) => ScreenActionResponse {
            task_id: Some(id.to_string()),
            expanded: Some(expanded),
            ..ScreenActionResponse::success("Card toggled.")
        },
        Err(err) => ScreenActionResponse::failure(format!("screen_toggle_card failed: {err}")),
    }
}

/// Returns every card in list order.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_cards() -> CardListResponse {
    match with_screen(|state| state.cards().map_err(|err| err.to_string())) {
        Ok(cards) => CardListResponse {
            ok: true,
            message: format!("{} card(s).", cards.len()),
            items: cards.into_iter().map(to_card_item).collect(),
        },
        Err(err) => CardListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("screen_cards failed: {err}"),
        },
    }
}

/// Validates interval bounds given as RFC 3339 strings.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_interval(start: String, end: String) -> IntervalCheckResponse {
    let bounds = parse_instant(start.as_str()).and_then(|start| {
        let end = parse_instant(end.as_str())?;
        Ok((start, end))
    });
    let (start, end) = match bounds {
        Ok(bounds) => bounds,
        Err(err) => {
            return IntervalCheckResponse {
                ok: false,
                span_ms: None,
                message: format!("validate_interval failed: {err}"),
            }
        }
    };

    let span_ms = Some((end - start).num_milliseconds());
    match Interval::new(start, end) {
        Ok(_) => IntervalCheckResponse {
            ok: true,
            span_ms,
            message: "Interval accepted.".to_string(),
        },
        Err(err) => IntervalCheckResponse {
            ok: false,
            span_ms,
            message: format!("validate_interval failed: {err}"),
        },
    }
}

fn with_screen<T>(
    f: impl FnOnce(&mut TaskListState) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = SCREEN
        .lock()
        .map_err(|_| "state lock poisoned".to_string())?;
    let state = guard
        .as_mut()
        .ok_or_else(|| "screen is not mounted".to_string())?;
    f(state)
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    TaskId::parse_str(raw.trim()).map_err(|err| format!("invalid task id `{raw}`: {err}"))
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("invalid instant `{raw}`: {err}"))
}

fn to_card_item(card: TaskCardView) -> CardItem {
    CardItem {
        task_id: card.task_id.to_string(),
        title: card.title,
        expanded: card.expanded,
        toggle_label: card.toggle_label.to_string(),
        summary_lines: card.summary_lines,
        detail_lines: card.detail_lines,
    }
}
