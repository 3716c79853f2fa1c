//! Behaviour tests for the seating registry use cases.
//!
//! Scenarios run the registry over an in-memory snapshot store so they cover
//! the seeding, assignment, lookup, and id allocation paths end to end.

use std::sync::Arc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use seating::domain::ports::{
    AssignRequest, AttendeeFilter, MoveRequest, SeatingCommand, SeatingQuery, TableLookup,
};
use seating::domain::{Error, IdAllocationPolicy, SeatingRegistry, SeedCatalog};
use seating::outbound::persistence::InMemorySnapshotStore;
use tokio::runtime::Runtime;

type Registry = SeatingRegistry<InMemorySnapshotStore>;

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct SeatingWorld {
    runtime: Slot<RuntimeHandle>,
    registry: Slot<Arc<Registry>>,
    last_lookup: Slot<TableLookup>,
    last_error: Slot<Error>,
    next_id: Slot<String>,
}

impl SeatingWorld {
    fn run<T, F, Fut>(&self, operation: F) -> T
    where
        F: FnOnce(Arc<Registry>) -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        let runtime = self.runtime.get().expect("runtime");
        let registry = self.registry.get().expect("registry");
        runtime.0.block_on(operation(registry))
    }

    fn record<T>(&self, outcome: Result<T, Error>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.last_error.set(error);
                None
            }
        }
    }
}

fn unquote(raw: &str) -> String {
    raw.trim_matches('"').to_owned()
}

#[fixture]
fn world() -> SeatingWorld {
    SeatingWorld::default()
}

#[given("a freshly seeded registry")]
fn a_freshly_seeded_registry(world: &SeatingWorld) {
    let runtime = Runtime::new().expect("create runtime");
    let registry = runtime
        .block_on(SeatingRegistry::open(
            Arc::new(InMemorySnapshotStore::new()),
            SeedCatalog::reference(),
            IdAllocationPolicy::default(),
        ))
        .expect("registry should open");
    world.runtime.set(RuntimeHandle(Arc::new(runtime)));
    world.registry.set(Arc::new(registry));
}

#[when("organisers seat {attendee_id} as {name} at {table_id}")]
fn organisers_seat(world: &SeatingWorld, attendee_id: String, name: String, table_id: String) {
    let request = AssignRequest {
        attendee_id: unquote(&attendee_id),
        name: unquote(&name),
        table_id: unquote(&table_id),
    };
    let outcome = world.run(|registry| async move { registry.assign(request).await });
    world.record(outcome);
}

#[when("organisers unassign {attendee_id}")]
fn organisers_unassign(world: &SeatingWorld, attendee_id: String) {
    let attendee_id = unquote(&attendee_id);
    let outcome = world.run(|registry| async move { registry.unassign(&attendee_id).await });
    world.record(outcome);
}

#[when("organisers move {attendee_id} to {table_id}")]
fn organisers_move(world: &SeatingWorld, attendee_id: String, table_id: String) {
    let request = MoveRequest {
        attendee_id: unquote(&attendee_id),
        new_table_id: unquote(&table_id),
    };
    let outcome = world.run(|registry| async move { registry.move_attendee(request).await });
    world.record(outcome);
}

#[when("organisers request the next id")]
fn organisers_request_next_id(world: &SeatingWorld) {
    let outcome = world.run(|registry| async move { registry.generate_id().await });
    if let Some(id) = world.record(outcome) {
        world.next_id.set(id.to_string());
    }
}

#[when("the attendee looks up {attendee_id}")]
fn the_attendee_looks_up(world: &SeatingWorld, attendee_id: String) {
    let attendee_id = unquote(&attendee_id);
    let outcome = world.run(|registry| async move { registry.lookup_table(&attendee_id).await });
    if let Some(lookup) = world.record(outcome) {
        world.last_lookup.set(lookup);
    }
}

#[then("the lookup names table {table_name}")]
fn the_lookup_names_table(world: &SeatingWorld, table_name: String) {
    let lookup = world.last_lookup.get().expect("lookup should succeed");
    assert_eq!(lookup.table.name(), unquote(&table_name));
}

#[then("the lookup names attendee {attendee_name}")]
fn the_lookup_names_attendee(world: &SeatingWorld, attendee_name: String) {
    let lookup = world.last_lookup.get().expect("lookup should succeed");
    assert_eq!(lookup.attendee_name, unquote(&attendee_name));
}

#[then("the table has {count} members")]
fn the_table_has_members(world: &SeatingWorld, count: usize) {
    let lookup = world.last_lookup.get().expect("lookup should succeed");
    assert_eq!(lookup.members.len(), count);
}

#[then("the request fails with {code}")]
fn the_request_fails_with(world: &SeatingWorld, code: String) {
    let error = world.last_error.get().expect("an error should be recorded");
    let actual = serde_json::to_value(error.code()).expect("code serialises");
    assert_eq!(actual, serde_json::Value::String(unquote(&code)));
}

#[then("no attendee is seated")]
fn no_attendee_is_seated(world: &SeatingWorld) {
    let seated = world
        .run(|registry| async move { registry.list_attendees(AttendeeFilter::AssignedOnly).await })
        .expect("listing succeeds");
    assert!(seated.is_empty(), "expected no seated attendees, got {seated:?}");
}

#[then("the next id is {expected}")]
fn the_next_id_is(world: &SeatingWorld, expected: String) {
    let next_id = world.next_id.get().expect("next id should be recorded");
    assert_eq!(next_id, unquote(&expected));
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "Attendee finds their table after being seated"
)]
fn attendee_finds_their_table(world: SeatingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "Seating at an unknown table is rejected"
)]
fn seating_at_unknown_table_is_rejected(world: SeatingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "Generated ids fill the lowest gap first"
)]
fn generated_ids_fill_lowest_gap(world: SeatingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "An unassigned attendee can no longer look up a table"
)]
fn unassigned_attendee_cannot_look_up(world: SeatingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "Moving an attendee changes their lookup"
)]
fn moving_attendee_changes_lookup(world: SeatingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seating_registry.feature",
    name = "Moving an attendee to their current table keeps their lookup"
)]
fn moving_attendee_to_current_table(world: SeatingWorld) {
    assert!(world.last_error.get().is_none(), "move to the same table should succeed");
}
