//! Serializable placement snapshot.
//!
//! # Responsibility
//! - Define the persisted bucket→ordered-ids document shape.
//! - Parse stored documents strictly; any shape violation means "absent".
//!
//! # Invariants
//! - Entry order mirrors the source: config order when built from a model,
//!   document key order when parsed from JSON.
//! - Buckets with zero items never appear (sparse representation).
//! - No schema version field; the stored form is a single JSON object.

use crate::model::item::ItemId;
use serde_json::{Map, Value};

/// Ordered bucket→ids document, the wire form of a placement model.
///
/// ```json
/// {"S":[3],"A":[1,2],"unranked":[4]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    entries: Vec<(String, Vec<ItemId>)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one bucket entry. Callers keep labels unique.
    pub fn push(&mut self, label: impl Into<String>, ids: Vec<ItemId>) {
        self.entries.push((label.into(), ids));
    }

    /// Iterates entries in stored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[ItemId])> {
        self.entries
            .iter()
            .map(|(label, ids)| (label.as_str(), ids.as_slice()))
    }

    /// Returns the ids listed under `label`, if the bucket is present.
    pub fn get(&self, label: &str) -> Option<&[ItemId]> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, ids)| ids.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to the exact stored JSON shape, preserving entry order.
    pub fn to_json_string(&self) -> String {
        let mut object = Map::with_capacity(self.entries.len());
        for (label, ids) in &self.entries {
            let values = ids.iter().map(|id| Value::from(*id)).collect();
            object.insert(label.clone(), Value::Array(values));
        }
        Value::Object(object).to_string()
    }

    /// Parses a stored document, strictly.
    ///
    /// Returns `None` when the text is not valid JSON, not an object, or any
    /// value is not an array of integers. A rejected document is treated as
    /// absent by callers; nothing here panics or raises.
    pub fn from_json_str(text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        let object = value.as_object()?;

        let mut entries = Vec::with_capacity(object.len());
        for (label, ids_value) in object {
            let array = ids_value.as_array()?;
            let mut ids = Vec::with_capacity(array.len());
            for id_value in array {
                ids.push(id_value.as_i64()?);
            }
            entries.push((label.clone(), ids));
        }
        Some(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    #[test]
    fn json_round_trip_preserves_entry_order() {
        let mut snapshot = Snapshot::new();
        snapshot.push("S", vec![3]);
        snapshot.push("A", vec![1, 2]);
        snapshot.push("unranked", vec![4]);

        let text = snapshot.to_json_string();
        assert_eq!(text, r#"{"S":[3],"A":[1,2],"unranked":[4]}"#);

        let parsed = Snapshot::from_json_str(&text).expect("own output should parse");
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn parse_keeps_document_key_order() {
        let snapshot =
            Snapshot::from_json_str(r#"{"unranked":[9],"B":[1],"A":[2]}"#).expect("should parse");
        let labels: Vec<&str> = snapshot.entries().map(|(label, _)| label).collect();
        assert_eq!(labels, ["unranked", "B", "A"]);
    }

    #[test]
    fn rejects_documents_not_matching_shape() {
        // Not JSON at all.
        assert_eq!(Snapshot::from_json_str("not json"), None);
        // Not an object.
        assert_eq!(Snapshot::from_json_str("[1,2,3]"), None);
        // Non-array bucket value.
        assert_eq!(Snapshot::from_json_str(r#"{"A":1}"#), None);
        // Non-integer id.
        assert_eq!(Snapshot::from_json_str(r#"{"A":[1,"two"]}"#), None);
        // Fractional id.
        assert_eq!(Snapshot::from_json_str(r#"{"A":[1.5]}"#), None);
    }

    #[test]
    fn empty_object_parses_to_empty_snapshot() {
        let snapshot = Snapshot::from_json_str("{}").expect("empty object is valid");
        assert!(snapshot.is_empty());
    }
}
