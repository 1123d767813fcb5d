use chrono::{DateTime, TimeDelta, Utc};
use taskcard_core::{Interval, NewTask, Task, STATUS_UNSCHEDULED};
use uuid::Uuid;

fn utc(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 instant")
}

fn afternoon() -> Interval {
    Interval::new(utc("2024-02-24T14:00:00Z"), utc("2024-02-24T18:00:00Z")).unwrap()
}

#[test]
fn task_new_keeps_fields_and_generates_id() {
    let task = Task::new(
        "Laundry",
        Some(STATUS_UNSCHEDULED.to_string()),
        afternoon(),
        TimeDelta::hours(2),
        1000.0,
    );

    assert!(!task.id().is_nil());
    assert_eq!(task.name(), "Laundry");
    assert_eq!(task.status(), Some("Unscheduled"));
    assert_eq!(task.interval(), &afternoon());
    assert_eq!(task.duration(), TimeDelta::hours(2));
    assert_eq!(task.effect(), 1000.0);
}

#[test]
fn task_status_is_optional() {
    let task = Task::new("Dishwasher", None, afternoon(), TimeDelta::hours(1), 1800.0);
    assert_eq!(task.status(), None);
}

#[test]
fn interval_reads_are_stable_after_task_construction() {
    let interval = afternoon();
    let task = Task::new("Heat pump", None, interval, TimeDelta::hours(3), 2500.0);
    let copy = task.clone();

    for _ in 0..3 {
        assert_eq!(task.interval().start(), interval.start());
        assert_eq!(task.interval().end(), interval.end());
    }
    assert_eq!(copy.interval(), task.interval());
}

// Duration and interval span are independent and never cross-checked.
#[test]
fn duration_longer_than_interval_is_accepted() {
    let task = Task::new("Oven", None, afternoon(), TimeDelta::hours(9), 3000.0);
    assert!(task.duration() > task.interval().span());
}

#[test]
fn negative_effect_is_accepted() {
    let task = Task::new("Solar", None, afternoon(), TimeDelta::hours(1), -400.0);
    assert_eq!(task.effect(), -400.0);
}

#[test]
fn new_task_propagates_interval_error() {
    let request = NewTask {
        name: "Too long".to_string(),
        status: None,
        start: utc("2024-02-24T00:00:00Z"),
        end: utc("2024-02-25T00:00:01Z"),
        duration: TimeDelta::hours(2),
        effect: 1000.0,
    };

    let err = request.into_task().unwrap_err();
    assert_eq!(err.span(), TimeDelta::days(1) + TimeDelta::seconds(1));
}

#[test]
fn new_task_builds_valid_task() {
    let request = NewTask {
        name: "EV charge".to_string(),
        status: Some("Scheduled".to_string()),
        start: utc("2024-02-24T22:00:00Z"),
        end: utc("2024-02-25T06:00:00Z"),
        duration: TimeDelta::hours(4),
        effect: 7400.0,
    };

    let task = request.into_task().unwrap();
    assert_eq!(task.interval().span(), TimeDelta::hours(8));
    assert_eq!(task.status(), Some("Scheduled"));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(
        id,
        "My Task 0",
        Some("Unscheduled".to_string()),
        afternoon(),
        TimeDelta::minutes(90),
        1000.0,
    );

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "My Task 0");
    assert_eq!(json["status"], "Unscheduled");
    assert_eq!(json["interval"]["start"], "2024-02-24T14:00:00Z");
    assert_eq!(json["duration_ms"], 5_400_000_i64);
    assert_eq!(json["effect"], 1000.0);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_deserialize_rejects_invalid_interval() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "bad",
        "status": null,
        "interval": { "start": "2024-02-24T00:00:00Z", "end": "2024-02-26T00:00:00Z" },
        "duration_ms": 0,
        "effect": 0.0
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
