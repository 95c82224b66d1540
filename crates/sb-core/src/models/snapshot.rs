use crate::models::sprint::Sprint;
use crate::models::task::Task;

/// The complete serializable state of the board at a point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub sprints: Vec<Sprint>,
}
