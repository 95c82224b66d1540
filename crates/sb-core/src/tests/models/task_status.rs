use crate::{CoreError, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Backlog.as_str(), "backlog");
    assert_eq!(TaskStatus::Todo.as_str(), "todo");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::InReview.as_str(), "in-review");
    assert_eq!(TaskStatus::Done.as_str(), "done");
}

#[test]
fn test_task_status_from_str_round_trips() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_task_status_from_str_rejects_unknown_token() {
    let result = TaskStatus::from_str("in_progress");

    assert!(matches!(
        result,
        Err(CoreError::InvalidTaskStatus { ref value, .. }) if value == "in_progress"
    ));
}
