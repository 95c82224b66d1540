use sb_core::TaskStatus;

use uuid::Uuid;

/// Domain event emitted after a mutation completes. Carries the display
/// fields observers need; the store itself never formats user-facing text.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    TaskCreated { id: Uuid, title: String },
    TaskUpdated { id: Uuid },
    TaskDeleted { id: Uuid, title: String },
    TaskMoved { id: Uuid, status: TaskStatus },
    TaskAssigned { id: Uuid, title: String, sprint_id: Uuid },
    TaskRemovedFromSprint { id: Uuid, title: String },
    SprintCreated { id: Uuid, name: String },
    SprintUpdated { id: Uuid },
    SprintDeleted { id: Uuid, name: String },
    SprintStarted { id: Uuid, name: String },
    SprintEnded { id: Uuid, name: String },
    SnapshotLoadFailed,
    SnapshotWriteFailed,
}
