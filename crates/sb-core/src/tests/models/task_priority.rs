use crate::{CoreError, TaskPriority};

use std::str::FromStr;

#[test]
fn test_task_priority_as_str() {
    assert_eq!(TaskPriority::Low.as_str(), "low");
    assert_eq!(TaskPriority::Medium.as_str(), "medium");
    assert_eq!(TaskPriority::High.as_str(), "high");
}

#[test]
fn test_task_priority_from_str_round_trips() {
    for token in ["low", "medium", "high"] {
        assert_eq!(TaskPriority::from_str(token).unwrap().as_str(), token);
    }
}

#[test]
fn test_task_priority_from_str_rejects_unknown_token() {
    let result = TaskPriority::from_str("urgent");

    assert!(matches!(
        result,
        Err(CoreError::InvalidTaskPriority { ref value, .. }) if value == "urgent"
    ));
}
