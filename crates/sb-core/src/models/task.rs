use crate::models::new_task::NewTask;
use crate::models::task_patch::TaskPatch;
use crate::models::task_priority::TaskPriority;
use crate::models::task_status::TaskStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Core fields
    pub title: String,
    pub description: String,

    // Workflow
    pub status: TaskStatus,
    pub priority: TaskPriority,

    // Assignment
    pub assignee: Option<String>,

    // Sprint; None means the task sits in the backlog
    pub sprint_id: Option<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(input: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            assignee: input.assignee,
            sprint_id: input.sprint_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge patch fields into the task and refresh `updated_at`.
    /// `id`, `created_at`, and sprint membership are not patchable.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_backlog(&self) -> bool {
        self.sprint_id.is_none()
    }
}
