pub mod new_sprint;
pub mod new_task;
pub mod snapshot;
pub mod snapshot_dto;
pub mod sprint;
pub mod sprint_dto;
pub mod sprint_patch;
pub mod task;
pub mod task_dto;
pub mod task_patch;
pub mod task_priority;
pub mod task_status;
