use crate::{PersistError, Result as PersistResult};

use sb_core::{Snapshot, SnapshotDto};

use std::fs;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;

/// Reads and writes the full board snapshot at a named durable slot:
/// a single JSON document on disk.
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Restore the snapshot from the slot.
    ///
    /// An absent slot is not an error: the board starts empty. An
    /// unreadable or unparsable slot is returned as an error; the caller
    /// decides how to recover.
    pub fn load(&self) -> PersistResult<Snapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Snapshot::default()),
            Err(e) => {
                return Err(PersistError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let dto: SnapshotDto =
            serde_json::from_str(&contents).map_err(|e| PersistError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Snapshot::try_from(dto).map_err(|e| PersistError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Serialize the complete snapshot and overwrite the slot. Always the
    /// full document, never a delta.
    pub fn save(&self, snapshot: &Snapshot) -> PersistResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| PersistError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let dto = SnapshotDto::from(snapshot);
        let contents = serde_json::to_string(&dto).map_err(|source| PersistError::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::write(&self.path, contents).map_err(|e| PersistError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
