use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task priority: {value} {location}")]
    InvalidTaskPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error in {field}: {source} {location}")]
    Uuid {
        field: &'static str,
        source: uuid::Error,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp in {field}: {value} {location}")]
    Timestamp {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
