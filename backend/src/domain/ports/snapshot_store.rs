//! Port for registry snapshot persistence.
//!
//! The [`SnapshotStore`] trait is the only way the registry reaches durable
//! state. Adapters decide where the snapshot lives (a JSON file, memory, or
//! anything else that can hold one document).

use async_trait::async_trait;

use crate::domain::RegistrySnapshot;

use super::define_port_error;

define_port_error! {
    /// Errors raised by snapshot store adapters.
    pub enum SnapshotStoreError {
        /// The backing medium could not be read or written.
        Io { message: String } =>
            "snapshot store i/o failed: {message}",
        /// The snapshot could not be encoded for storage.
        Serialization { message: String } =>
            "snapshot serialisation failed: {message}",
        /// The stored document is not a valid snapshot.
        Format { message: String } =>
            "stored snapshot is malformed: {message}",
    }
}

/// Port for loading and saving the registry snapshot.
///
/// `save` replaces the stored document wholesale. Adapters must not leave a
/// partially written snapshot behind when a save fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot, or `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotStoreError>;

    /// Persist `snapshot`, replacing any previous document.
    async fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), SnapshotStoreError>;
}
