//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: snapshot stores backed by a JSON file or process memory.
//!
//! Adapters translate between the domain snapshot and the storage medium and
//! contain no seating logic.

pub mod persistence;
