pub mod error;
pub mod snapshot_repository;

pub use error::{PersistError, Result};
pub use snapshot_repository::SnapshotRepository;
