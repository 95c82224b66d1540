use crate::BoardEvent;

/// Receives domain events after each completed mutation.
///
/// Observers render advisory feedback (notifications, logging). They take
/// no part in the correctness contract and cannot veto a mutation.
pub trait BoardObserver {
    fn notify(&self, event: &BoardEvent);
}
