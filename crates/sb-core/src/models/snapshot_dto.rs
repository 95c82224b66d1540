use crate::{CoreError, CoreResult, Snapshot, Sprint, SprintDto, Task, TaskDto};

use serde::{Deserialize, Serialize};

/// The persisted document: the full board state under a single slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDto {
    pub tasks: Vec<TaskDto>,
    pub sprints: Vec<SprintDto>,
}

impl From<&Snapshot> for SnapshotDto {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            tasks: snapshot.tasks.iter().map(TaskDto::from).collect(),
            sprints: snapshot.sprints.iter().map(SprintDto::from).collect(),
        }
    }
}

impl TryFrom<SnapshotDto> for Snapshot {
    type Error = CoreError;

    fn try_from(dto: SnapshotDto) -> CoreResult<Self> {
        Ok(Snapshot {
            tasks: dto
                .tasks
                .into_iter()
                .map(Task::try_from)
                .collect::<CoreResult<Vec<_>>>()?,
            sprints: dto
                .sprints
                .into_iter()
                .map(Sprint::try_from)
                .collect::<CoreResult<Vec<_>>>()?,
        })
    }
}
