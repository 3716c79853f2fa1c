//! Seed catalogue used to populate an empty registry.

use super::{Attendee, AttendeeId, RegistrySnapshot, Table, TableId};

/// Registration number prefix used by the reference deployment.
pub const DEFAULT_ID_PREFIX: &str = "CHI-IHE";

/// Placeholder pool size used by the reference deployment.
pub const DEFAULT_POOL_SIZE: u64 = 350;

const REFERENCE_TABLES: [(&str, &str); 25] = [
    ("table1", "Eternity Table"),
    ("table2", "Burberry Table"),
    ("table3", "Euphoria Table"),
    ("table4", "Legend"),
    ("table5", "Obsession Table"),
    ("table6", "Touch Table"),
    ("table7", "Chrome Table"),
    ("table8", "Davidoff Table"),
    ("table9", "Beautiful Table"),
    ("table10", "Sauvage Table"),
    ("table11", "Chanel Table"),
    ("table12", "Lancome Table"),
    ("table13", "Dior Table"),
    ("table14", "Tomford Table"),
    ("table15", "Givenchy Table"),
    ("table16", "Cherry Table"),
    ("table17", "Cucci Table"),
    ("table18", "Cartier Table"),
    ("table19", "Forever Table"),
    ("table20", "Creed Table"),
    ("table21", "Fendi Table"),
    ("table22", "Boss Table"),
    ("table23", "Jadore Table"),
    ("table24", "Blue Table"),
    ("table25", "Giorgio Table"),
];

/// Describes the initial registry contents: id prefix, pool size, and the
/// table catalogue.
///
/// # Examples
/// ```
/// use seating::domain::SeedCatalog;
///
/// let seed = SeedCatalog::reference();
/// let snapshot = seed.snapshot();
/// assert_eq!(snapshot.attendees().len(), 350);
/// assert_eq!(snapshot.tables().len(), 25);
/// assert_eq!(snapshot.last_id(), 350);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalog {
    id_prefix: String,
    pool_size: u64,
    tables: Vec<Table>,
}

impl SeedCatalog {
    /// Build a catalogue from explicit parts.
    pub fn new(id_prefix: impl Into<String>, pool_size: u64, tables: Vec<Table>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            pool_size,
            tables,
        }
    }

    /// The reference deployment: `CHI-IHE`, 350 placeholders, 25 tables.
    pub fn reference() -> Self {
        Self::new(DEFAULT_ID_PREFIX, DEFAULT_POOL_SIZE, reference_tables())
    }

    /// Replace the id prefix, keeping the pool and tables.
    #[must_use]
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }

    /// Replace the pool size, keeping the prefix and tables.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u64) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Prefix prepended to every generated registration number.
    pub fn id_prefix(&self) -> &str {
        self.id_prefix.as_str()
    }

    /// Number of placeholder attendees in a fresh registry.
    pub fn pool_size(&self) -> u64 {
        self.pool_size
    }

    /// Table catalogue in display order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Format `number` as a registration number under this prefix.
    pub fn attendee_id(&self, number: u64) -> AttendeeId {
        AttendeeId::from_number(&self.id_prefix, number)
    }

    /// Produce a fresh snapshot: every placeholder unassigned and the cursor
    /// at the pool size.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let attendees = (1..=self.pool_size)
            .map(|number| Attendee::placeholder(self.attendee_id(number)))
            .collect();
        RegistrySnapshot::new(attendees, self.tables.clone(), self.pool_size)
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

fn reference_tables() -> Vec<Table> {
    REFERENCE_TABLES
        .iter()
        .map(|(id, name)| Table::new(TableId::from_stored((*id).to_owned()), *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn reference_seed_matches_deployment() {
        let snapshot = SeedCatalog::reference().snapshot();

        let first = snapshot.attendees().first().expect("first attendee");
        let last = snapshot.attendees().last().expect("last attendee");
        assert_eq!(first.id().as_str(), "CHI-IHE000001");
        assert_eq!(last.id().as_str(), "CHI-IHE000350");
        assert!(snapshot.attendees().iter().all(|a| !a.is_assigned()));

        let names: Vec<&str> = snapshot.tables().iter().map(Table::name).collect();
        assert_eq!(names.first(), Some(&"Eternity Table"));
        assert_eq!(names.get(3), Some(&"Legend"));
        assert_eq!(names.last(), Some(&"Giorgio Table"));
    }

    #[rstest]
    fn overrides_apply_to_snapshot() {
        let snapshot = SeedCatalog::reference()
            .with_id_prefix("EVT-")
            .with_pool_size(3)
            .snapshot();

        let ids: Vec<&str> = snapshot.attendees().iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, ["EVT-000001", "EVT-000002", "EVT-000003"]);
        assert_eq!(snapshot.last_id(), 3);
    }
}
