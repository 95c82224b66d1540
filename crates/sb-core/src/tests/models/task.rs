use crate::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};

use uuid::Uuid;

fn new_task_input() -> NewTask {
    NewTask {
        title: "Write the report".to_string(),
        description: "Quarterly numbers".to_string(),
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        assignee: None,
        sprint_id: None,
    }
}

#[test]
fn test_task_new() {
    let task = Task::new(new_task_input());

    assert_eq!(task.title, "Write the report");
    assert_eq!(task.description, "Quarterly numbers");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.assignee, None);
    assert_eq!(task.sprint_id, None);
    assert_eq!(task.created_at, task.updated_at);
    assert!(task.is_backlog());
}

#[test]
fn test_task_new_ids_are_unique() {
    let a = Task::new(new_task_input());
    let b = Task::new(new_task_input());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_task_apply_merges_fields_and_refreshes_updated_at() {
    let mut task = Task::new(new_task_input());
    let before = task.updated_at;

    task.apply(TaskPatch {
        title: Some("Ship the report".to_string()),
        priority: Some(TaskPriority::High),
        ..TaskPatch::default()
    });

    assert_eq!(task.title, "Ship the report");
    assert_eq!(task.priority, TaskPriority::High);
    // Untouched fields survive the merge
    assert_eq!(task.description, "Quarterly numbers");
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.updated_at >= before);
    assert!(task.updated_at >= task.created_at);
}

#[test]
fn test_task_apply_can_clear_assignee() {
    let mut task = Task::new(NewTask {
        assignee: Some("ana".to_string()),
        ..new_task_input()
    });

    task.apply(TaskPatch {
        assignee: Some(None),
        ..TaskPatch::default()
    });

    assert_eq!(task.assignee, None);
}

#[test]
fn test_task_apply_empty_patch_keeps_fields() {
    let mut task = Task::new(new_task_input());
    let id = task.id;
    let created_at = task.created_at;

    task.apply(TaskPatch::default());

    assert_eq!(task.id, id);
    assert_eq!(task.created_at, created_at);
    assert_eq!(task.title, "Write the report");
}

#[test]
fn test_task_is_backlog_tracks_sprint_membership() {
    let mut task = Task::new(new_task_input());
    assert!(task.is_backlog());

    task.sprint_id = Some(Uuid::new_v4());
    assert!(!task.is_backlog());
}
