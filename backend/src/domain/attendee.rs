//! Attendee records and their seating state transitions.
//!
//! An attendee is either *unassigned* (blank name, no table) or *assigned*
//! (non-empty name, a table id). [`Attendee::assign`] and
//! [`Attendee::unassign`] switch between the two and keep the pair consistent.
//! [`Attendee::move_to`] only re-targets the table id and leaves the name and
//! `assigned` flag as they are.
//!
//! Records are serialised in the snapshot layout
//! `{ "id", "name", "tableId", "assigned" }` where an unassigned attendee has
//! `tableId: ""`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TableId;

/// Validation errors returned when constructing attendee values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendeeValidationError {
    /// The registration number was blank.
    #[error("attendee id must not be empty")]
    EmptyId,
    /// The attendee name was blank.
    #[error("attendee name must not be empty")]
    EmptyName,
}

/// Registration number such as `CHI-IHE000101`.
///
/// [`AttendeeId::parse`] trims and upper-cases its input so look-ups are
/// case-insensitive. Deserialisation keeps stored values verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeId(String);

impl AttendeeId {
    /// Normalise and validate a raw registration number.
    ///
    /// # Examples
    /// ```
    /// use seating::domain::AttendeeId;
    ///
    /// let id = AttendeeId::parse("  chi-ihe000001 ").expect("valid id");
    /// assert_eq!(id.as_str(), "CHI-IHE000001");
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AttendeeValidationError> {
        let normalised = raw.as_ref().trim().to_uppercase();
        if normalised.is_empty() {
            return Err(AttendeeValidationError::EmptyId);
        }
        Ok(Self(normalised))
    }

    /// Format `number` as a zero-padded, six digit id under `prefix`.
    ///
    /// # Examples
    /// ```
    /// use seating::domain::AttendeeId;
    ///
    /// assert_eq!(AttendeeId::from_number("CHI-IHE", 101).as_str(), "CHI-IHE000101");
    /// ```
    pub fn from_number(prefix: &str, number: u64) -> Self {
        Self(format!("{prefix}{number:06}"))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AttendeeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Display name of a seated attendee; trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeName(String);

impl AttendeeName {
    /// Validate and trim a raw name.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AttendeeValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AttendeeValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// `{id, name}` pair describing someone sitting at a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMember {
    /// Registration number.
    pub id: AttendeeId,
    /// Display name.
    pub name: String,
}

/// An attendee slot in the registry pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    id: AttendeeId,
    #[serde(default)]
    name: String,
    #[serde(default, with = "blank_table_id")]
    table_id: Option<TableId>,
    #[serde(default)]
    assigned: bool,
}

impl Attendee {
    /// An unassigned placeholder.
    pub fn placeholder(id: AttendeeId) -> Self {
        Self {
            id,
            name: String::new(),
            table_id: None,
            assigned: false,
        }
    }

    /// A new record seated at `table_id`.
    pub fn seated(id: AttendeeId, name: AttendeeName, table_id: TableId) -> Self {
        let mut attendee = Self::placeholder(id);
        attendee.assign(name, table_id);
        attendee
    }

    /// Registration number.
    pub fn id(&self) -> &AttendeeId {
        &self.id
    }

    /// Display name; empty while unassigned.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Table the attendee sits at, if any.
    pub fn table_id(&self) -> Option<&TableId> {
        self.table_id.as_ref()
    }

    /// Whether the attendee currently occupies a table.
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// True when the attendee is assigned and sits at `table_id`.
    pub fn is_seated_at(&self, table_id: &TableId) -> bool {
        self.assigned && self.table_id.as_ref() == Some(table_id)
    }

    /// Seat the attendee, overwriting any previous name and table.
    pub fn assign(&mut self, name: AttendeeName, table_id: TableId) {
        self.name = name.0;
        self.table_id = Some(table_id);
        self.assigned = true;
    }

    /// Release the seat, clearing both the name and the table.
    pub fn unassign(&mut self) {
        self.name.clear();
        self.table_id = None;
        self.assigned = false;
    }

    /// Re-target the attendee's table without touching name or flag.
    pub fn move_to(&mut self, table_id: TableId) {
        self.table_id = Some(table_id);
    }

    /// Reduce the record to the `{id, name}` pair shown in rosters.
    pub fn as_member(&self) -> TableMember {
        TableMember {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// `tableId` is a blank string in the snapshot layout when no table is set.
mod blank_table_id {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::TableId;

    pub(super) fn serialize<S>(value: &Option<TableId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_ref().map_or("", TableId::as_str))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<TableId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|value| !value.trim().is_empty())
            .map(TableId::from_stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn table() -> TableId {
        TableId::parse("table3").expect("table id")
    }

    #[fixture]
    fn ada() -> AttendeeName {
        AttendeeName::parse("Ada Lovelace").expect("name")
    }

    #[rstest]
    #[case("chi-ihe000001", "CHI-IHE000001")]
    #[case("  CHI-IHE000350\t", "CHI-IHE000350")]
    fn parse_normalises_case_and_whitespace(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(AttendeeId::parse(raw).expect("valid").as_str(), expected);
    }

    #[rstest]
    fn parse_rejects_blank_ids() {
        assert_eq!(AttendeeId::parse("  "), Err(AttendeeValidationError::EmptyId));
    }

    #[rstest]
    fn name_parse_rejects_blank_names() {
        assert_eq!(AttendeeName::parse("\n"), Err(AttendeeValidationError::EmptyName));
    }

    #[rstest]
    fn from_number_pads_to_six_digits() {
        assert_eq!(AttendeeId::from_number("CHI-IHE", 7).as_str(), "CHI-IHE000007");
        assert_eq!(AttendeeId::from_number("CHI-IHE", 351).as_str(), "CHI-IHE000351");
    }

    #[rstest]
    fn assign_then_unassign_clears_everything(table: TableId, ada: AttendeeName) {
        let mut attendee = Attendee::placeholder(AttendeeId::from_number("CHI-IHE", 1));
        attendee.assign(ada, table.clone());
        assert!(attendee.is_seated_at(&table));
        assert_eq!(attendee.name(), "Ada Lovelace");

        attendee.unassign();
        assert!(!attendee.is_assigned());
        assert!(attendee.table_id().is_none());
        assert!(attendee.name().is_empty());
    }

    #[rstest]
    fn move_to_keeps_name_and_flag(table: TableId, ada: AttendeeName) {
        let mut attendee = Attendee::seated(AttendeeId::from_number("CHI-IHE", 2), ada, table);
        let target = TableId::parse("table9").expect("table id");
        attendee.move_to(target.clone());

        assert!(attendee.is_seated_at(&target));
        assert_eq!(attendee.name(), "Ada Lovelace");
    }

    #[rstest]
    fn placeholder_serialises_blank_table_id() {
        let attendee = Attendee::placeholder(AttendeeId::from_number("CHI-IHE", 1));
        let value = serde_json::to_value(&attendee).expect("serialise");
        assert_eq!(
            value,
            json!({ "id": "CHI-IHE000001", "name": "", "tableId": "", "assigned": false })
        );
    }

    #[rstest]
    #[case(json!({ "id": "X1", "tableId": "" }))]
    #[case(json!({ "id": "X1", "tableId": null }))]
    #[case(json!({ "id": "X1" }))]
    fn deserialises_missing_or_blank_table_as_none(#[case] payload: serde_json::Value) {
        let attendee: Attendee = serde_json::from_value(payload).expect("lenient record");
        assert!(attendee.table_id().is_none());
        assert!(!attendee.is_assigned());
    }
}
