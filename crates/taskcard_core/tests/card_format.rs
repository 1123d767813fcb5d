use chrono::{DateTime, TimeDelta, Utc};
use taskcard_core::{
    format_clock, format_duration, format_effect, format_interval, DurationFormatError,
    Interval, Task, TaskCardView, TOGGLE_LABEL_COMPACT, TOGGLE_LABEL_EXPAND,
};

fn utc(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 instant")
}

fn sample_task(status: Option<&str>, duration: TimeDelta) -> Task {
    let interval =
        Interval::new(utc("2024-02-24T14:00:00Z"), utc("2024-02-24T18:00:00Z")).unwrap();
    Task::new(
        "My Task 0",
        status.map(str::to_string),
        interval,
        duration,
        1000.0,
    )
}

#[test]
fn clock_renders_utc_hours_and_minutes() {
    assert_eq!(format_clock(utc("2024-02-24T14:00:00Z")), "14:00");
    assert_eq!(format_clock(utc("2024-02-24T18:00:00Z")), "18:00");
    assert_eq!(format_clock(utc("2024-02-24T09:05:59Z")), "09:05");
}

#[test]
fn clock_ignores_source_offset() {
    let instant: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-02-24T16:00:00+02:00")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_clock(instant), "14:00");
}

#[test]
fn interval_renders_both_bounds() {
    let task = sample_task(None, TimeDelta::hours(2));
    assert_eq!(format_interval(task.interval()), "14:00 - 18:00");
}

#[test]
fn duration_renders_zero_padded_hours_and_minutes() {
    assert_eq!(format_duration(TimeDelta::hours(2)).unwrap(), "02:00");
    assert_eq!(format_duration(TimeDelta::minutes(90)).unwrap(), "01:30");
    assert_eq!(format_duration(TimeDelta::seconds(59)).unwrap(), "00:00");
}

#[test]
fn negative_duration_does_not_format() {
    assert!(matches!(
        format_duration(TimeDelta::hours(-1)),
        Err(DurationFormatError::Negative { .. })
    ));
}

#[test]
fn effect_renders_with_watt_suffix() {
    assert_eq!(format_effect(1000.0), "1000.0W");
    assert_eq!(format_effect(2.5), "2.5W");
}

#[test]
fn collapsed_card_shows_status_and_schedule() {
    let task = sample_task(Some("Unscheduled"), TimeDelta::hours(2));

    let card = TaskCardView::render(&task, false).unwrap();

    assert_eq!(card.task_id, task.id());
    assert_eq!(card.title, "My Task 0");
    assert!(!card.expanded);
    assert_eq!(card.toggle_label, TOGGLE_LABEL_EXPAND);
    assert_eq!(
        card.summary_lines,
        vec!["Unscheduled".to_string(), "14:00 - 18:00 (02:00)".to_string()]
    );
    assert!(card.detail_lines.is_empty());
}

#[test]
fn expanded_card_shows_labelled_details() {
    let task = sample_task(Some("Unscheduled"), TimeDelta::hours(2));

    let card = TaskCardView::render(&task, true).unwrap();

    assert!(card.expanded);
    assert_eq!(card.toggle_label, TOGGLE_LABEL_COMPACT);
    assert!(card.summary_lines.is_empty());
    assert_eq!(
        card.detail_lines,
        vec![
            "Status: Unscheduled".to_string(),
            "Interval: 14:00 - 18:00".to_string(),
            "Duration: 02:00".to_string(),
            "Effect: 1000.0W".to_string(),
        ]
    );
}

#[test]
fn card_without_status_omits_status_lines() {
    let task = sample_task(None, TimeDelta::minutes(90));

    let collapsed = TaskCardView::render(&task, false).unwrap();
    assert_eq!(collapsed.summary_lines, vec!["14:00 - 18:00 (01:30)".to_string()]);

    let expanded = TaskCardView::render(&task, true).unwrap();
    assert_eq!(expanded.detail_lines.len(), 3);
    assert_eq!(expanded.detail_lines[0], "Interval: 14:00 - 18:00");
}

#[test]
fn card_render_fails_for_negative_duration() {
    let task = sample_task(None, TimeDelta::minutes(-1));
    assert!(TaskCardView::render(&task, false).is_err());
}
