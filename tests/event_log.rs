use std::fs;

use design_patterns::behavioral::mediator::user_accounts_example;
use design_patterns::behavioral::observer::{user_repository_example, EventLog};
use serde_json::json;
use tempfile::TempDir;

fn events_in(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.split('\'').nth(1))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_observer_logger_writes_every_event() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");

    let lines = user_repository_example(&path).unwrap();
    assert!(lines.contains(
        &"OnboardingNotification: The notification has been emailed to admin@example.com!"
            .to_string()
    ));

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        events_in(&contents),
        vec!["users:init", "users:created", "users:deleted"]
    );
    assert!(contents.contains(r#""name":"John Doe""#));
}

#[test]
fn test_mediator_logger_writes_every_event() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.log");

    user_accounts_example(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        events_in(&contents),
        vec!["users:init", "users:created", "users:deleted"]
    );
}

#[test]
fn test_event_log_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.log");
    fs::write(&path, "stale entry\n").unwrap();

    let log = EventLog::create(&path).unwrap();
    log.append("ping", &json!({"n": 1})).unwrap();

    let contents = fs::read_to_string(log.path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.trim_end().ends_with(r#": 'ping' with data '{"n":1}'"#));
}
