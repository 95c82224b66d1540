use sb_store::{BoardEvent, BoardObserver};

/// Renders domain events as transient console notifications, on stderr so
/// JSON results on stdout stay clean.
pub struct ConsoleNotifier;

impl BoardObserver for ConsoleNotifier {
    fn notify(&self, event: &BoardEvent) {
        if let Some((title, detail)) = notification(event) {
            eprintln!("{title}: {detail}");
        }
    }
}

/// Notification copy for an event. `None` for events with no user-facing
/// message (moving a card speaks for itself).
pub(crate) fn notification(event: &BoardEvent) -> Option<(String, String)> {
    match event {
        BoardEvent::TaskCreated { title, .. } => Some((
            "Task created".to_string(),
            format!("\"{}\" has been added.", title),
        )),
        BoardEvent::TaskUpdated { .. } => Some((
            "Task updated".to_string(),
            "Your changes have been saved.".to_string(),
        )),
        BoardEvent::TaskDeleted { title, .. } => Some((
            "Task deleted".to_string(),
            format!("\"{}\" has been removed.", title),
        )),
        BoardEvent::TaskMoved { .. } => None,
        BoardEvent::TaskAssigned { title, .. } => Some((
            "Task assigned".to_string(),
            format!("\"{}\" has been added to the sprint.", title),
        )),
        BoardEvent::TaskRemovedFromSprint { title, .. } => Some((
            "Task removed from sprint".to_string(),
            format!("\"{}\" has been moved to the backlog.", title),
        )),
        BoardEvent::SprintCreated { name, .. } => Some((
            "Sprint created".to_string(),
            format!("\"{}\" has been created.", name),
        )),
        BoardEvent::SprintUpdated { .. } => Some((
            "Sprint updated".to_string(),
            "Your changes have been saved.".to_string(),
        )),
        BoardEvent::SprintDeleted { name, .. } => Some((
            "Sprint deleted".to_string(),
            format!("\"{}\" has been removed.", name),
        )),
        BoardEvent::SprintStarted { name, .. } => Some((
            "Sprint started".to_string(),
            format!("\"{}\" is now active.", name),
        )),
        BoardEvent::SprintEnded { name, .. } => Some((
            "Sprint ended".to_string(),
            format!("\"{}\" has been completed.", name),
        )),
        BoardEvent::SnapshotLoadFailed => Some((
            "Error loading saved data".to_string(),
            "Your previous work could not be loaded correctly.".to_string(),
        )),
        BoardEvent::SnapshotWriteFailed => Some((
            "Error saving data".to_string(),
            "Your latest changes could not be written to disk.".to_string(),
        )),
    }
}
