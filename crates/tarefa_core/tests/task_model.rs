use tarefa_core::{Task, TaskDate};
use uuid::Uuid;

#[test]
fn task_serializes_with_null_date_when_unscheduled() {
    let task = Task::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        "Buy milk",
        None,
    );

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "00000000-0000-4000-8000-000000000001");
    assert_eq!(json["text"], "Buy milk");
    assert!(json["date"].is_null());
}

#[test]
fn task_roundtrips_through_json() {
    let task = Task::new("Call mom", Some(TaskDate::parse("2024-05-01").unwrap()));

    let json = serde_json::to_string(&task).unwrap();
    let back: Task = serde_json::from_str(&json).unwrap();

    assert_eq!(back, task);
}

#[test]
fn record_without_id_gets_a_fresh_one() {
    let record = r#"{"text":"Buy milk","date":null}"#;

    let first: Task = serde_json::from_str(record).unwrap();
    let second: Task = serde_json::from_str(record).unwrap();

    assert_eq!(first.text, "Buy milk");
    assert_eq!(first.date, None);
    assert_ne!(first.id, second.id);
}

#[test]
fn record_without_date_field_is_unscheduled() {
    let task: Task = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
    assert_eq!(task.date, None);
    assert!(!task.is_scheduled());
}

#[test]
fn record_with_malformed_date_is_rejected() {
    let result = serde_json::from_str::<Task>(r#"{"text":"Buy milk","date":"someday"}"#);
    assert!(result.is_err());
}

#[test]
fn date_accepts_calendar_shape() {
    let date = TaskDate::parse("2024-05-01").unwrap();
    assert_eq!(date.as_str(), "2024-05-01");
    assert_eq!(date.to_string(), "2024-05-01");
}

#[test]
fn date_rejects_wrong_shapes() {
    for value in ["2024-5-1", "01-05-2024", "2024/05/01", "2024-05-01x", ""] {
        assert!(TaskDate::parse(value).is_err(), "`{value}` should be rejected");
    }
}

#[test]
fn date_rejects_out_of_range_components() {
    for value in ["2024-00-10", "2024-13-10", "2024-05-00", "2024-05-32"] {
        assert!(TaskDate::parse(value).is_err(), "`{value}` should be rejected");
    }
}

#[test]
fn date_serializes_as_plain_string() {
    let date = TaskDate::parse("2024-05-01").unwrap();
    assert_eq!(serde_json::to_string(&date).unwrap(), r#""2024-05-01""#);

    let back: TaskDate = serde_json::from_str(r#""2024-05-01""#).unwrap();
    assert_eq!(back, date);
}

#[test]
fn is_scheduled_reflects_date_presence() {
    let scheduled = Task::new("Dentist", Some(TaskDate::parse("2024-06-15").unwrap()));
    let unscheduled = Task::new("Dentist", None);

    assert!(scheduled.is_scheduled());
    assert!(!unscheduled.is_scheduled());
}
