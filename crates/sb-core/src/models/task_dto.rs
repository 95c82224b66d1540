use crate::{CoreError, CoreResult, Task, parse_timestamp, parse_uuid};

use crate::models::task_priority::TaskPriority;
use crate::models::task_status::TaskStatus;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wire representation of a task: camelCase keys, ids and timestamps as
/// strings, absent assignee/sprint serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub assignee: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub sprint_id: Option<String>,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            assignee: task.assignee.clone(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
            sprint_id: task.sprint_id.map(|id| id.to_string()),
        }
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = CoreError;

    fn try_from(dto: TaskDto) -> CoreResult<Self> {
        Ok(Task {
            id: parse_uuid(&dto.id, "task.id")?,
            title: dto.title,
            description: dto.description,
            status: TaskStatus::from_str(&dto.status)?,
            priority: TaskPriority::from_str(&dto.priority)?,
            assignee: dto.assignee,
            sprint_id: dto
                .sprint_id
                .as_deref()
                .map(|id| parse_uuid(id, "task.sprintId"))
                .transpose()?,
            created_at: parse_timestamp(&dto.created_at, "task.createdAt")?,
            updated_at: parse_timestamp(&dto.updated_at, "task.updatedAt")?,
        })
    }
}
