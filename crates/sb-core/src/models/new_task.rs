use crate::models::task_priority::TaskPriority;
use crate::models::task_status::TaskStatus;

use uuid::Uuid;

/// Caller-supplied fields for task creation. Id and audit timestamps are
/// allocated by the store.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub sprint_id: Option<Uuid>,
}
