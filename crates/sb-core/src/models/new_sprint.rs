use chrono::{DateTime, Utc};

/// Caller-supplied fields for sprint creation. The id is allocated by the
/// store; `is_active` is taken as given, creation never auto-activates.
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}
