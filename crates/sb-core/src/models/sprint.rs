use crate::models::new_sprint::NewSprint;
use crate::models::sprint_patch::SprintPatch;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,

    pub name: String,

    // No ordering constraint between the two dates is enforced here
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub is_active: bool,
}

impl Sprint {
    pub fn new(input: NewSprint) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: input.is_active,
        }
    }

    /// Merge patch fields into the sprint. Activation is not patchable;
    /// it only changes through the start/end transitions.
    pub fn apply(&mut self, patch: SprintPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
    }
}
