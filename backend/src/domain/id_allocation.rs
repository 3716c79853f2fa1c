//! Registration number allocation.
//!
//! Ids inside the placeholder pool `[1, N]` are handed out gap-first: the
//! lowest number not held by an assigned attendee wins. Once the pool is full
//! the snapshot's `lastId` cursor advances past `N`. What happens to pool ids
//! freed after that point depends on [`IdAllocationPolicy`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{AttendeeId, RegistrySnapshot, SeedCatalog};

/// Strategy for ids freed after the cursor has left the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAllocationPolicy {
    /// Always rescan the pool, so freed low ids are reused first.
    #[default]
    ReuseGaps,
    /// Skip the scan once the cursor is past the pool; never reuse.
    Monotonic,
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id allocation policy `{0}` (expected `reuse-gaps` or `monotonic`)")]
pub struct UnknownPolicyError(pub String);

impl IdAllocationPolicy {
    /// Kebab-case name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReuseGaps => "reuse-gaps",
            Self::Monotonic => "monotonic",
        }
    }
}

impl fmt::Display for IdAllocationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdAllocationPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse-gaps" | "reuse_gaps" => Ok(Self::ReuseGaps),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(UnknownPolicyError(other.to_owned())),
        }
    }
}

/// Outcome of one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Allocation {
    pub(crate) id: AttendeeId,
    /// New cursor value when the id came from past the pool.
    pub(crate) cursor: Option<u64>,
}

/// Pick the next registration number for `snapshot`.
///
/// The returned id is not reserved. Callers persist `cursor` when present.
pub(crate) fn allocate(
    snapshot: &RegistrySnapshot,
    seed: &SeedCatalog,
    policy: IdAllocationPolicy,
) -> Allocation {
    let pool_size = seed.pool_size();
    let taken: HashSet<&AttendeeId> = snapshot
        .attendees()
        .iter()
        .filter(|attendee| attendee.is_assigned())
        .map(|attendee| attendee.id())
        .collect();

    let scan_pool = match policy {
        IdAllocationPolicy::ReuseGaps => true,
        IdAllocationPolicy::Monotonic => snapshot.last_id() <= pool_size,
    };
    if scan_pool {
        let free = (1..=pool_size)
            .map(|number| seed.attendee_id(number))
            .find(|id| !taken.contains(id));
        if let Some(id) = free {
            return Allocation { id, cursor: None };
        }
    }

    // Records appended with explicit ids may already sit past the cursor.
    let mut next = snapshot.last_id().max(pool_size).saturating_add(1);
    while taken.contains(&seed.attendee_id(next)) {
        next = next.saturating_add(1);
    }
    Allocation {
        id: seed.attendee_id(next),
        cursor: Some(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttendeeName, TableId};
    use rstest::{fixture, rstest};

    fn seat(snapshot: &mut RegistrySnapshot, seed: &SeedCatalog, number: u64) {
        let id = seed.attendee_id(number);
        let name = AttendeeName::parse(format!("Guest {number}")).expect("name");
        let table = TableId::parse("table1").expect("table id");
        match snapshot.find_attendee_mut(&id) {
            Some(attendee) => attendee.assign(name, table),
            None => snapshot.push_attendee(crate::domain::Attendee::seated(id, name, table)),
        }
    }

    fn release(snapshot: &mut RegistrySnapshot, seed: &SeedCatalog, number: u64) {
        snapshot
            .find_attendee_mut(&seed.attendee_id(number))
            .expect("attendee")
            .unassign();
    }

    #[fixture]
    fn seed() -> SeedCatalog {
        SeedCatalog::reference().with_pool_size(3)
    }

    #[rstest]
    #[case(IdAllocationPolicy::ReuseGaps)]
    #[case(IdAllocationPolicy::Monotonic)]
    fn empty_pool_yields_first_id(seed: SeedCatalog, #[case] policy: IdAllocationPolicy) {
        let snapshot = seed.snapshot();
        let allocation = allocate(&snapshot, &seed, policy);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000001");
        assert_eq!(allocation.cursor, None);
    }

    #[rstest]
    fn fills_lowest_gap(seed: SeedCatalog) {
        let mut snapshot = seed.snapshot();
        seat(&mut snapshot, &seed, 1);
        seat(&mut snapshot, &seed, 3);

        let allocation = allocate(&snapshot, &seed, IdAllocationPolicy::ReuseGaps);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000002");
    }

    #[rstest]
    #[case(IdAllocationPolicy::ReuseGaps)]
    #[case(IdAllocationPolicy::Monotonic)]
    fn full_pool_advances_cursor(seed: SeedCatalog, #[case] policy: IdAllocationPolicy) {
        let mut snapshot = seed.snapshot();
        for number in 1..=3 {
            seat(&mut snapshot, &seed, number);
        }

        let allocation = allocate(&snapshot, &seed, policy);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000004");
        assert_eq!(allocation.cursor, Some(4));
    }

    #[rstest]
    fn reuse_gaps_returns_freed_id_after_cursor_advanced(seed: SeedCatalog) {
        let mut snapshot = seed.snapshot();
        for number in 1..=3 {
            seat(&mut snapshot, &seed, number);
        }
        snapshot.set_last_id(4);
        release(&mut snapshot, &seed, 2);

        let allocation = allocate(&snapshot, &seed, IdAllocationPolicy::ReuseGaps);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000002");
        assert_eq!(allocation.cursor, None);
    }

    #[rstest]
    fn monotonic_skips_freed_id_after_cursor_advanced(seed: SeedCatalog) {
        let mut snapshot = seed.snapshot();
        for number in 1..=3 {
            seat(&mut snapshot, &seed, number);
        }
        snapshot.set_last_id(4);
        release(&mut snapshot, &seed, 2);

        let allocation = allocate(&snapshot, &seed, IdAllocationPolicy::Monotonic);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000005");
        assert_eq!(allocation.cursor, Some(5));
    }

    #[rstest]
    fn cursor_skips_ids_already_assigned(seed: SeedCatalog) {
        let mut snapshot = seed.snapshot();
        for number in 1..=4 {
            seat(&mut snapshot, &seed, number);
        }

        let allocation = allocate(&snapshot, &seed, IdAllocationPolicy::ReuseGaps);
        assert_eq!(allocation.id.as_str(), "CHI-IHE000005");
        assert_eq!(allocation.cursor, Some(5));
    }

    #[rstest]
    fn cursor_below_pool_is_raised_to_pool_size(seed: SeedCatalog) {
        let mut snapshot = seed.snapshot();
        for number in 1..=3 {
            seat(&mut snapshot, &seed, number);
        }
        snapshot.set_last_id(0);

        let allocation = allocate(&snapshot, &seed, IdAllocationPolicy::Monotonic);
        assert_eq!(allocation.cursor, Some(4));
    }

    #[rstest]
    #[case("reuse-gaps", IdAllocationPolicy::ReuseGaps)]
    #[case(" Monotonic ", IdAllocationPolicy::Monotonic)]
    #[case("reuse_gaps", IdAllocationPolicy::ReuseGaps)]
    fn parses_policy_names(#[case] raw: &str, #[case] expected: IdAllocationPolicy) {
        assert_eq!(raw.parse::<IdAllocationPolicy>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_policy() {
        assert!("random".parse::<IdAllocationPolicy>().is_err());
    }
}
