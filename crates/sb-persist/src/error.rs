use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot serialization failed: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Corrupt snapshot in {path}: {message} {location}")]
    Corrupt {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, PersistError>;
