//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the seating driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::SeatingRegistry;
use crate::domain::ports::{SeatingCommand, SeatingQuery, SnapshotStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only seating use cases.
    pub query: Arc<dyn SeatingQuery>,
    /// Seating mutations.
    pub command: Arc<dyn SeatingCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use seating::domain::{IdAllocationPolicy, SeatingRegistry, SeedCatalog};
    /// use seating::inbound::http::state::HttpState;
    /// use seating::outbound::persistence::InMemorySnapshotStore;
    ///
    /// # async fn build() -> Result<(), seating::domain::Error> {
    /// let registry = Arc::new(
    ///     SeatingRegistry::open(
    ///         Arc::new(InMemorySnapshotStore::new()),
    ///         SeedCatalog::reference(),
    ///         IdAllocationPolicy::default(),
    ///     )
    ///     .await?,
    /// );
    /// let state = HttpState::new(registry.clone(), registry);
    /// # let _ = state;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(query: Arc<dyn SeatingQuery>, command: Arc<dyn SeatingCommand>) -> Self {
        Self { query, command }
    }

    /// Route both ports to one registry.
    pub fn from_registry<S>(registry: Arc<SeatingRegistry<S>>) -> Self
    where
        S: SnapshotStore + 'static,
    {
        Self {
            query: registry.clone(),
            command: registry,
        }
    }
}
