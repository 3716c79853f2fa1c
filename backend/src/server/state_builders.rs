//! Builders wiring the seating registry to its snapshot store.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::info;

use seating::SeatingSettings;
use seating::domain::ports::SnapshotStore;
use seating::domain::{IdAllocationPolicy, SeatingRegistry, SeedCatalog};
use seating::inbound::http::state::HttpState;
use seating::outbound::persistence::{InMemorySnapshotStore, JsonFileSnapshotStore};

/// Open the registry over `store` and expose it through the HTTP ports.
async fn open_state<S>(
    store: S,
    seed: SeedCatalog,
    policy: IdAllocationPolicy,
) -> io::Result<web::Data<HttpState>>
where
    S: SnapshotStore + 'static,
{
    let registry = SeatingRegistry::open(Arc::new(store), seed, policy)
        .await
        .map_err(io::Error::other)?;
    Ok(web::Data::new(HttpState::from_registry(Arc::new(registry))))
}

/// Build HTTP state using the file store, or memory when `ephemeral` is set.
///
/// # Errors
/// Returns [`std::io::Error`] when settings are invalid or the registry
/// cannot be loaded or seeded.
pub(crate) async fn build_http_state(
    settings: &SeatingSettings,
) -> io::Result<web::Data<HttpState>> {
    let seed = settings.seed().map_err(io::Error::other)?;
    let policy = settings.id_policy().map_err(io::Error::other)?;

    if settings.ephemeral {
        info!(%policy, pool_size = seed.pool_size(), "using in-memory snapshot store");
        return open_state(InMemorySnapshotStore::new(), seed, policy).await;
    }

    let path = settings.snapshot_path();
    let store = JsonFileSnapshotStore::new(&path).map_err(io::Error::other)?;
    info!(
        path = %path.display(),
        %policy,
        pool_size = seed.pool_size(),
        "using JSON file snapshot store"
    );
    open_state(store, seed, policy).await
}
