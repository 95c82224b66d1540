use crate::models::task_priority::TaskPriority;
use crate::models::task_status::TaskStatus;

/// Field-level update for a task. Absent fields are left untouched;
/// `assignee` distinguishes "leave" (`None`) from "clear" (`Some(None)`).
///
/// `id` and `created_at` are immutable and not representable here. Sprint
/// membership changes only through the assign/remove transitions.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<Option<String>>,
}
