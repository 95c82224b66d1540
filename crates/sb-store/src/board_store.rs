use crate::{BoardEvent, BoardObserver, Result as StoreResult, StoreError};

use sb_core::{
    NewSprint, NewTask, Snapshot, Sprint, SprintPatch, Task, TaskPatch, TaskStatus,
};
use sb_persist::SnapshotRepository;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

/// Owns the canonical task and sprint collections.
///
/// Every mutation runs to completion on the calling thread: update the
/// in-memory state, write the full snapshot to the repository, emit one
/// domain event. Snapshot write failures are advisory; the in-memory
/// state stays authoritative for the rest of the session.
///
/// Construct once at application start and pass the handle to consumers.
pub struct BoardStore {
    state: Snapshot,
    repository: SnapshotRepository,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl BoardStore {
    /// Open the store against a snapshot slot.
    ///
    /// A missing slot starts an empty board. A malformed slot also starts
    /// an empty board and surfaces `SnapshotLoadFailed` to the observers
    /// instead of failing construction.
    pub fn open(repository: SnapshotRepository, observers: Vec<Box<dyn BoardObserver>>) -> Self {
        let (state, load_failed) = match repository.load() {
            Ok(snapshot) => (snapshot, false),
            Err(e) => {
                warn!("Failed to load board snapshot: {}", e);
                (Snapshot::default(), true)
            }
        };

        let store = Self {
            state,
            repository,
            observers,
        };

        if load_failed {
            store.emit(&BoardEvent::SnapshotLoadFailed);
        }

        store
    }

    // ------------------------------------------------------------------ //
    // Task mutations
    // ------------------------------------------------------------------ //

    pub fn create_task(&mut self, input: NewTask) -> Task {
        let task = Task::new(input);
        self.state.tasks.push(task.clone());

        self.commit(BoardEvent::TaskCreated {
            id: task.id,
            title: task.title.clone(),
        });

        task
    }

    /// Merge patch fields into the matching task. Unknown id is a silent
    /// no-op.
    pub fn update_task(&mut self, id: Uuid, patch: TaskPatch) {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.apply(patch);

        self.commit(BoardEvent::TaskUpdated { id });
    }

    pub fn delete_task(&mut self, id: Uuid) {
        let Some(index) = self.state.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        let removed = self.state.tasks.remove(index);

        self.commit(BoardEvent::TaskDeleted {
            id,
            title: removed.title,
        });
    }

    /// Set the task's column. Deliberately context-free: any task can be
    /// moved whether or not it belongs to the active sprint.
    pub fn move_task(&mut self, id: Uuid, new_status: TaskStatus) {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.status = new_status.clone();
        task.updated_at = Utc::now();

        self.commit(BoardEvent::TaskMoved {
            id,
            status: new_status,
        });
    }

    /// Put the task into the sprint. The sprint must exist; a dangling
    /// reference is never created. Unknown task id is a silent no-op.
    pub fn assign_task_to_sprint(&mut self, task_id: Uuid, sprint_id: Uuid) -> StoreResult<()> {
        if !self.state.sprints.iter().any(|s| s.id == sprint_id) {
            return Err(StoreError::sprint_not_found(sprint_id));
        }

        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == task_id) else {
            return Ok(());
        };
        task.sprint_id = Some(sprint_id);
        task.updated_at = Utc::now();
        let title = task.title.clone();

        self.commit(BoardEvent::TaskAssigned {
            id: task_id,
            title,
            sprint_id,
        });

        Ok(())
    }

    /// Move the task back to the backlog.
    pub fn remove_task_from_sprint(&mut self, task_id: Uuid) {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == task_id) else {
            return;
        };
        task.sprint_id = None;
        task.updated_at = Utc::now();
        let title = task.title.clone();

        self.commit(BoardEvent::TaskRemovedFromSprint { id: task_id, title });
    }

    // ------------------------------------------------------------------ //
    // Sprint mutations
    // ------------------------------------------------------------------ //

    pub fn create_sprint(&mut self, input: NewSprint) -> Sprint {
        let sprint = Sprint::new(input);
        self.state.sprints.push(sprint.clone());

        self.commit(BoardEvent::SprintCreated {
            id: sprint.id,
            name: sprint.name.clone(),
        });

        sprint
    }

    /// Merge patch fields into the matching sprint. The patch type cannot
    /// express activation; see `start_sprint` / `end_sprint`.
    pub fn update_sprint(&mut self, id: Uuid, patch: SprintPatch) {
        let Some(sprint) = self.state.sprints.iter_mut().find(|s| s.id == id) else {
            return;
        };
        sprint.apply(patch);

        self.commit(BoardEvent::SprintUpdated { id });
    }

    /// Remove the sprint and cascade: every task referencing it falls back
    /// to the backlog in the same operation.
    pub fn delete_sprint(&mut self, id: Uuid) {
        let Some(index) = self.state.sprints.iter().position(|s| s.id == id) else {
            return;
        };
        let removed = self.state.sprints.remove(index);

        for task in self
            .state
            .tasks
            .iter_mut()
            .filter(|t| t.sprint_id == Some(id))
        {
            task.sprint_id = None;
            task.updated_at = Utc::now();
        }

        self.commit(BoardEvent::SprintDeleted {
            id,
            name: removed.name,
        });
    }

    /// Activate the target sprint and deactivate every other sprint in one
    /// sweep, so at most one sprint is ever active. Unknown id is a silent
    /// no-op and leaves activation untouched.
    pub fn start_sprint(&mut self, id: Uuid) {
        let Some(target) = self.state.sprints.iter().find(|s| s.id == id) else {
            return;
        };
        let name = target.name.clone();

        for sprint in &mut self.state.sprints {
            sprint.is_active = sprint.id == id;
        }

        self.commit(BoardEvent::SprintStarted { id, name });
    }

    /// Deactivate only the target sprint; others are untouched.
    pub fn end_sprint(&mut self, id: Uuid) {
        let Some(sprint) = self.state.sprints.iter_mut().find(|s| s.id == id) else {
            return;
        };
        sprint.is_active = false;
        let name = sprint.name.clone();

        self.commit(BoardEvent::SprintEnded { id, name });
    }

    // ------------------------------------------------------------------ //
    // Derived queries
    // ------------------------------------------------------------------ //

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.state.sprints
    }

    /// The sprint currently driving the board view, if any.
    ///
    /// If persisted state was edited by hand to flag several sprints
    /// active, the first one in collection order wins; the choice is
    /// implementation-defined and the flags are not normalized.
    pub fn active_sprint(&self) -> Option<&Sprint> {
        self.state.sprints.iter().find(|s| s.is_active)
    }

    /// Tasks not assigned to any sprint.
    pub fn backlog_tasks(&self) -> Vec<&Task> {
        self.state.tasks.iter().filter(|t| t.is_backlog()).collect()
    }

    /// Tasks in the given column of the active sprint. Without an active
    /// sprint the board has nothing to show: every column is empty.
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        match self.active_sprint() {
            Some(sprint) => {
                let sprint_id = sprint.id;
                self.state
                    .tasks
                    .iter()
                    .filter(|t| t.status == status && t.sprint_id == Some(sprint_id))
                    .collect()
            }
            None => Vec::new(),
        }
    }

    // ------------------------------------------------------------------ //

    /// Persist the full snapshot, then publish the event. A failed write
    /// is logged and surfaced as `SnapshotWriteFailed`; the operation
    /// still completes.
    fn commit(&self, event: BoardEvent) {
        if let Err(e) = self.repository.save(&self.state) {
            warn!("Failed to persist board snapshot: {}", e);
            self.emit(&BoardEvent::SnapshotWriteFailed);
        }

        self.emit(&event);
    }

    fn emit(&self, event: &BoardEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
