use chrono::{DateTime, Utc};

/// Field-level update for a sprint.
///
/// Deliberately has no activation flag: `is_active` only changes through
/// the dedicated start/end transitions, which keeps the single-active
/// invariant out of reach of generic field patching.
#[derive(Debug, Clone, Default)]
pub struct SprintPatch {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
