//! Snapshot store adapters.

mod atomic_write;
mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileSnapshotStore;
pub use memory_store::InMemorySnapshotStore;
