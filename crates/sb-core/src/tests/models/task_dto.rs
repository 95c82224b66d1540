use crate::{CoreError, NewTask, Task, TaskDto, TaskPriority, TaskStatus};

use uuid::Uuid;

fn sample_task() -> Task {
    Task::new(NewTask {
        title: "Fix login".to_string(),
        description: String::new(),
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee: Some("ana".to_string()),
        sprint_id: Some(Uuid::new_v4()),
    })
}

fn sample_dto() -> TaskDto {
    TaskDto::from(&sample_task())
}

#[test]
fn test_task_dto_round_trip() {
    let task = sample_task();

    let dto = TaskDto::from(&task);
    let decoded = Task::try_from(dto).unwrap();

    assert_eq!(decoded.id, task.id);
    assert_eq!(decoded.title, task.title);
    assert_eq!(decoded.status, task.status);
    assert_eq!(decoded.priority, task.priority);
    assert_eq!(decoded.assignee, task.assignee);
    assert_eq!(decoded.sprint_id, task.sprint_id);
    assert_eq!(decoded.created_at, task.created_at);
    assert_eq!(decoded.updated_at, task.updated_at);
}

#[test]
fn test_task_dto_uses_wire_tokens() {
    let dto = sample_dto();

    assert_eq!(dto.status, "in-progress");
    assert_eq!(dto.priority, "high");
}

#[test]
fn test_task_dto_serializes_camel_case_keys() {
    let json = serde_json::to_value(sample_dto()).unwrap();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("createdAt"));
    assert!(object.contains_key("updatedAt"));
    assert!(object.contains_key("sprintId"));
    assert!(!object.contains_key("created_at"));
}

#[test]
fn test_task_dto_serializes_absent_assignee_as_null() {
    let mut task = sample_task();
    task.assignee = None;
    task.sprint_id = None;

    let json = serde_json::to_value(TaskDto::from(&task)).unwrap();

    assert!(json["assignee"].is_null());
    assert!(json["sprintId"].is_null());
}

#[test]
fn test_task_dto_rejects_invalid_id() {
    let mut dto = sample_dto();
    dto.id = "not-a-uuid".to_string();

    let result = Task::try_from(dto);

    assert!(matches!(
        result,
        Err(CoreError::Uuid { field: "task.id", .. })
    ));
}

#[test]
fn test_task_dto_rejects_invalid_timestamp() {
    let mut dto = sample_dto();
    dto.created_at = "yesterday".to_string();

    let result = Task::try_from(dto);

    assert!(matches!(
        result,
        Err(CoreError::Timestamp { field: "task.createdAt", .. })
    ));
}

#[test]
fn test_task_dto_rejects_unknown_status() {
    let mut dto = sample_dto();
    dto.status = "blocked".to_string();

    let result = Task::try_from(dto);

    assert!(matches!(result, Err(CoreError::InvalidTaskStatus { .. })));
}
