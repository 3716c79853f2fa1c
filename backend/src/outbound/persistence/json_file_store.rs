//! JSON file snapshot store.
//!
//! The snapshot lives in a single pretty-printed JSON document. Saves replace
//! the file atomically; a missing file (or directory) loads as an empty
//! store. Filesystem access goes through `cap-std` on a blocking thread.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use super::atomic_write::write_atomic;
use crate::domain::RegistrySnapshot;
use crate::domain::ports::{SnapshotStore, SnapshotStoreError};

/// Snapshot store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    directory: PathBuf,
    file_name: String,
}

impl JsonFileSnapshotStore {
    /// Create a store for `path`.
    ///
    /// The parent directory is created on first save.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when `path` has no file name.
    ///
    /// # Examples
    /// ```
    /// use seating::outbound::persistence::JsonFileSnapshotStore;
    ///
    /// let store = JsonFileSnapshotStore::new("data/seating.json").expect("file path");
    /// assert!(store.path().ends_with("seating.json"));
    /// assert!(JsonFileSnapshotStore::new("/").is_err());
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SnapshotStoreError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                SnapshotStoreError::io(format!("{} is not a file path", path.display()))
            })?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            directory,
            file_name: file_name.to_owned(),
        })
    }

    /// Full path of the snapshot document.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    fn read_blocking(&self) -> Result<Option<RegistrySnapshot>, SnapshotStoreError> {
        let dir = match Dir::open_ambient_dir(&self.directory, ambient_authority()) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(&err)),
        };
        let bytes = match dir.read(&self.file_name) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(&err)),
        };
        RegistrySnapshot::from_json(&bytes)
            .map(Some)
            .map_err(|err| SnapshotStoreError::format(format!("{}: {err}", self.path().display())))
    }

    fn write_blocking(&self, contents: &[u8]) -> Result<(), SnapshotStoreError> {
        Dir::create_ambient_dir_all(&self.directory, ambient_authority())
            .map_err(|err| self.io_error(&err))?;
        let dir = Dir::open_ambient_dir(&self.directory, ambient_authority())
            .map_err(|err| self.io_error(&err))?;
        write_atomic(&dir, &self.file_name, contents).map_err(|err| self.io_error(&err))
    }

    fn io_error(&self, err: &io::Error) -> SnapshotStoreError {
        SnapshotStoreError::io(format!("{}: {err}", self.path().display()))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotStoreError> {
        let store = self.clone();
        let loaded = tokio::task::spawn_blocking(move || store.read_blocking())
            .await
            .map_err(|err| SnapshotStoreError::io(format!("load task failed: {err}")))??;
        debug!(path = %self.path().display(), found = loaded.is_some(), "loaded snapshot");
        Ok(loaded)
    }

    async fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), SnapshotStoreError> {
        let contents = snapshot
            .to_json_pretty()
            .map_err(|err| SnapshotStoreError::serialization(err.to_string()))?;
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.write_blocking(&contents))
            .await
            .map_err(|err| SnapshotStoreError::io(format!("save task failed: {err}")))??;
        debug!(path = %self.path().display(), "saved snapshot");
        Ok(())
    }
}
