//! Seating registry service.
//!
//! [`SeatingRegistry`] owns the visible snapshot behind a Tokio `RwLock` and
//! implements both driving ports. Mutations run on a cloned working copy that
//! is swapped in only after the store accepted it, so a failed save never
//! leaves the registry half-applied.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::id_allocation::{self, Allocation};
use crate::domain::ports::{
    AssignRequest, AttendeeFilter, EnrollRequest, MoveRequest, SeatingCommand, SeatingQuery,
    SnapshotStore, SnapshotStoreError, TableLookup, TableRoster,
};
use crate::domain::{
    Attendee, AttendeeId, AttendeeName, Error, IdAllocationPolicy, RegistrySnapshot, SeedCatalog,
    SnapshotFormatError, Table, TableId,
};

/// Attendee and table registry backed by a [`SnapshotStore`].
pub struct SeatingRegistry<S> {
    store: Arc<S>,
    seed: SeedCatalog,
    policy: IdAllocationPolicy,
    state: RwLock<RegistrySnapshot>,
}

impl<S> SeatingRegistry<S>
where
    S: SnapshotStore,
{
    /// Load the registry from `store`, seeding and saving defaults when the
    /// store is empty.
    ///
    /// # Errors
    ///
    /// Fails when the store cannot be read, holds a malformed document, or
    /// rejects the seeded snapshot.
    pub async fn open(
        store: Arc<S>,
        seed: SeedCatalog,
        policy: IdAllocationPolicy,
    ) -> Result<Self, Error> {
        let snapshot = load_or_seed(store.as_ref(), &seed).await?;
        Ok(Self {
            store,
            seed,
            policy,
            state: RwLock::new(snapshot),
        })
    }

    /// Seed used for resets and id formatting.
    pub fn seed(&self) -> &SeedCatalog {
        &self.seed
    }

    /// Active id allocation policy.
    pub fn policy(&self) -> IdAllocationPolicy {
        self.policy
    }

    /// Clone of the visible snapshot.
    pub async fn snapshot(&self) -> RegistrySnapshot {
        self.state.read().await.clone()
    }

    async fn mutate<T, F>(&self, operation: &'static str, apply: F) -> Result<T, Error>
    where
        F: FnOnce(&mut RegistrySnapshot) -> Result<T, Error>,
    {
        let mut visible = self.state.write().await;
        let mut working = visible.clone();
        let outcome = apply(&mut working)?;
        self.persist(operation, &working).await?;
        *visible = working;
        Ok(outcome)
    }

    async fn persist(
        &self,
        operation: &'static str,
        snapshot: &RegistrySnapshot,
    ) -> Result<(), Error> {
        self.store.save(snapshot).await.map_err(|err| {
            warn!(operation, error = %err, "failed to persist registry snapshot");
            map_store_error(err)
        })
    }

    fn allocate(&self, snapshot: &RegistrySnapshot) -> Allocation {
        id_allocation::allocate(snapshot, &self.seed, self.policy)
    }
}

async fn load_or_seed<S>(store: &S, seed: &SeedCatalog) -> Result<RegistrySnapshot, Error>
where
    S: SnapshotStore + ?Sized,
{
    if let Some(mut snapshot) = store.load().await.map_err(map_store_error)? {
        // Documents stored without `lastId` decode as 0; imports get the same floor.
        snapshot.raise_cursor_to(seed.pool_size());
        return Ok(snapshot);
    }

    let snapshot = seed.snapshot();
    store.save(&snapshot).await.map_err(|err| {
        warn!(error = %err, "failed to persist seeded registry");
        map_store_error(err)
    })?;
    info!(
        attendees = snapshot.attendees().len(),
        tables = snapshot.tables().len(),
        "seeded empty registry"
    );
    Ok(snapshot)
}

fn map_store_error(error: SnapshotStoreError) -> Error {
    match error {
        SnapshotStoreError::Io { message } => {
            Error::storage_unavailable(format!("snapshot store unavailable: {message}"))
        }
        SnapshotStoreError::Serialization { message } => {
            Error::storage_unavailable(format!("snapshot could not be stored: {message}"))
        }
        SnapshotStoreError::Format { message } => {
            Error::invalid_format(format!("stored snapshot is malformed: {message}"))
        }
    }
}

fn map_format_error(error: SnapshotFormatError) -> Error {
    let details = match &error {
        SnapshotFormatError::Malformed(_) => json!({ "code": "malformed_json" }),
        SnapshotFormatError::MissingSequence { field } => {
            json!({ "field": field, "code": "missing_array" })
        }
    };
    Error::invalid_format(error.to_string()).with_details(details)
}

fn field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

fn parse_attendee_id(raw: &str) -> Result<AttendeeId, Error> {
    AttendeeId::parse(raw)
        .map_err(|_| field_error("attendeeId", "empty", "registration number is required"))
}

fn parse_name(raw: &str) -> Result<AttendeeName, Error> {
    AttendeeName::parse(raw).map_err(|_| field_error("name", "empty", "name is required"))
}

fn parse_table_id(field: &str, raw: &str) -> Result<TableId, Error> {
    TableId::parse(raw).map_err(|_| field_error(field, "empty", "table id is required"))
}

fn ensure_table(
    snapshot: &RegistrySnapshot,
    field: &str,
    table_id: &TableId,
) -> Result<(), Error> {
    if snapshot.find_table(table_id).is_none() {
        return Err(field_error(
            field,
            "unknown_table",
            format!("table {table_id} does not exist"),
        ));
    }
    Ok(())
}

fn seat(
    snapshot: &mut RegistrySnapshot,
    id: AttendeeId,
    name: AttendeeName,
    table: TableId,
) -> Attendee {
    match snapshot.find_attendee_mut(&id) {
        Some(existing) => {
            existing.assign(name, table);
            existing.clone()
        }
        None => {
            let attendee = Attendee::seated(id, name, table);
            snapshot.push_attendee(attendee.clone());
            attendee
        }
    }
}

fn attendee_not_found(id: &AttendeeId) -> Error {
    Error::not_found(format!("attendee {id} not found"))
}

#[async_trait]
impl<S> SeatingQuery for SeatingRegistry<S>
where
    S: SnapshotStore,
{
    async fn lookup_table(&self, attendee_id: &str) -> Result<TableLookup, Error> {
        let id = parse_attendee_id(attendee_id)?;
        let snapshot = self.state.read().await;

        let attendee = snapshot
            .find_attendee(&id)
            .filter(|attendee| attendee.is_assigned())
            .ok_or_else(|| Error::not_found(format!("no table assignment found for {id}")))?;
        let table_id = attendee
            .table_id()
            .ok_or_else(|| Error::not_found(format!("no table assignment found for {id}")))?;
        let table = snapshot.find_table(table_id).ok_or_else(|| {
            Error::not_found(format!("table {table_id} assigned to {id} no longer exists"))
                .with_details(json!({ "code": "table_missing", "tableId": table_id }))
        })?;

        Ok(TableLookup {
            table: table.clone(),
            attendee_name: attendee.name().to_owned(),
            members: snapshot.members_of(table_id),
        })
    }

    async fn list_attendees(&self, filter: AttendeeFilter) -> Result<Vec<Attendee>, Error> {
        let snapshot = self.state.read().await;
        Ok(snapshot
            .attendees()
            .iter()
            .filter(|attendee| filter.admits(attendee))
            .cloned()
            .collect())
    }

    async fn list_tables(&self) -> Result<Vec<Table>, Error> {
        Ok(self.state.read().await.tables().to_vec())
    }

    async fn table_roster(&self) -> Result<Vec<TableRoster>, Error> {
        let snapshot = self.state.read().await;
        Ok(snapshot
            .tables()
            .iter()
            .map(|table| TableRoster {
                table: table.clone(),
                members: snapshot.members_of(table.id()),
            })
            .collect())
    }

    async fn export_snapshot(&self) -> Result<Vec<u8>, Error> {
        self.state
            .read()
            .await
            .to_json_pretty()
            .map_err(|err| Error::internal(format!("failed to serialise snapshot: {err}")))
    }
}

#[async_trait]
impl<S> SeatingCommand for SeatingRegistry<S>
where
    S: SnapshotStore,
{
    async fn assign(&self, request: AssignRequest) -> Result<Attendee, Error> {
        let id = parse_attendee_id(&request.attendee_id)?;
        let name = parse_name(&request.name)?;
        let table_id = parse_table_id("tableId", &request.table_id)?;

        let attendee = self
            .mutate("assign", |snapshot| {
                ensure_table(snapshot, "tableId", &table_id)?;
                Ok(seat(snapshot, id, name, table_id))
            })
            .await?;
        info!(
            attendee_id = %attendee.id(),
            table_id = attendee.table_id().map(TableId::as_str),
            "attendee assigned"
        );
        Ok(attendee)
    }

    async fn enroll(&self, request: EnrollRequest) -> Result<Attendee, Error> {
        let name = parse_name(&request.name)?;
        let table_id = parse_table_id("tableId", &request.table_id)?;

        let attendee = self
            .mutate("enroll", |snapshot| {
                ensure_table(snapshot, "tableId", &table_id)?;
                let Allocation { id, cursor } = self.allocate(snapshot);
                if let Some(cursor) = cursor {
                    snapshot.set_last_id(cursor);
                }
                Ok(seat(snapshot, id, name, table_id))
            })
            .await?;
        info!(
            attendee_id = %attendee.id(),
            table_id = attendee.table_id().map(TableId::as_str),
            "attendee enrolled"
        );
        Ok(attendee)
    }

    async fn unassign(&self, attendee_id: &str) -> Result<Attendee, Error> {
        let id = parse_attendee_id(attendee_id)?;
        let attendee = self
            .mutate("unassign", |snapshot| {
                let attendee = snapshot
                    .find_attendee_mut(&id)
                    .ok_or_else(|| attendee_not_found(&id))?;
                attendee.unassign();
                Ok(attendee.clone())
            })
            .await?;
        info!(attendee_id = %attendee.id(), "attendee unassigned");
        Ok(attendee)
    }

    async fn move_attendee(&self, request: MoveRequest) -> Result<Attendee, Error> {
        let id = parse_attendee_id(&request.attendee_id)?;
        let table_id = parse_table_id("newTableId", &request.new_table_id)?;

        let attendee = self
            .mutate("move", |snapshot| {
                if snapshot.find_attendee(&id).is_none() {
                    return Err(attendee_not_found(&id));
                }
                ensure_table(snapshot, "newTableId", &table_id)?;
                let attendee = snapshot
                    .find_attendee_mut(&id)
                    .ok_or_else(|| attendee_not_found(&id))?;
                attendee.move_to(table_id);
                Ok(attendee.clone())
            })
            .await?;
        info!(
            attendee_id = %attendee.id(),
            table_id = attendee.table_id().map(TableId::as_str),
            "attendee moved"
        );
        Ok(attendee)
    }

    async fn generate_id(&self) -> Result<AttendeeId, Error> {
        let mut visible = self.state.write().await;
        let Allocation { id, cursor } = self.allocate(&visible);
        if let Some(cursor) = cursor {
            let mut working = visible.clone();
            working.set_last_id(cursor);
            self.persist("generate_id", &working).await?;
            *visible = working;
            info!(attendee_id = %id, cursor, "id cursor advanced");
        }
        Ok(id)
    }

    async fn reset_all(&self) -> Result<RegistrySnapshot, Error> {
        let snapshot = self
            .mutate("reset", |snapshot| {
                *snapshot = self.seed.snapshot();
                Ok(snapshot.clone())
            })
            .await?;
        info!(attendees = snapshot.attendees().len(), "registry reset to seed");
        Ok(snapshot)
    }

    async fn initialize(&self) -> Result<RegistrySnapshot, Error> {
        let mut visible = self.state.write().await;
        let snapshot = load_or_seed(self.store.as_ref(), &self.seed).await?;
        *visible = snapshot.clone();
        info!(
            attendees = snapshot.attendees().len(),
            "registry reloaded from store"
        );
        Ok(snapshot)
    }

    async fn import_snapshot(&self, payload: &[u8]) -> Result<RegistrySnapshot, Error> {
        let mut imported = RegistrySnapshot::from_json(payload).map_err(map_format_error)?;
        imported.raise_cursor_to(self.seed.pool_size());

        let snapshot = self
            .mutate("import", move |snapshot| {
                *snapshot = imported;
                Ok(snapshot.clone())
            })
            .await?;
        info!(
            attendees = snapshot.attendees().len(),
            tables = snapshot.tables().len(),
            "registry snapshot imported"
        );
        Ok(snapshot)
    }
}
