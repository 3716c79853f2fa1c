//! In-memory snapshot store for ephemeral deployments and tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::domain::RegistrySnapshot;
use crate::domain::ports::{SnapshotStore, SnapshotStoreError};

/// Keeps the latest saved snapshot in process memory.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshot: Mutex<Option<RegistrySnapshot>>,
    reject_saves: AtomicBool,
}

impl InMemorySnapshotStore {
    /// An empty store; the registry seeds it on open.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            reject_saves: AtomicBool::new(false),
        }
    }

    /// Make subsequent saves fail with an I/O error (or succeed again).
    pub fn reject_saves(&self, reject: bool) {
        self.reject_saves.store(reject, Ordering::SeqCst);
    }

    /// The most recently saved snapshot.
    pub fn stored(&self) -> Option<RegistrySnapshot> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<RegistrySnapshot>, SnapshotStoreError> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| SnapshotStoreError::io("in-memory store lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), SnapshotStoreError> {
        if self.reject_saves.load(Ordering::SeqCst) {
            return Err(SnapshotStoreError::io("in-memory store is rejecting saves"));
        }
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| SnapshotStoreError::io("in-memory store lock poisoned"))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}
