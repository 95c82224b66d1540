use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Sprint not found: {sprint_id} {location}")]
    SprintNotFound {
        sprint_id: Uuid,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn sprint_not_found(sprint_id: Uuid) -> Self {
        Self::SprintNotFound {
            sprint_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
