pub mod error;
pub mod models;
pub mod parse;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::new_sprint::NewSprint;
pub use models::new_task::NewTask;
pub use models::snapshot::Snapshot;
pub use models::snapshot_dto::SnapshotDto;
pub use models::sprint::Sprint;
pub use models::sprint_dto::SprintDto;
pub use models::sprint_patch::SprintPatch;
pub use models::task::Task;
pub use models::task_dto::TaskDto;
pub use models::task_patch::TaskPatch;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use parse::{parse_timestamp, parse_uuid};
