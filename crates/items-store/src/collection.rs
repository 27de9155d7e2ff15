//! The in-memory item collection and the operations over it.
//!
//! A [`Collection`] is rebuilt from disk for every request and dropped at
//! the end of it. Its serialized form is the storage document itself:
//!
//! ```json
//! {
//!   "items": [
//!     { "id": 1, "title": "A" }
//!   ]
//! }
//! ```
//!
//! Operations never touch the filesystem; see [`crate::store`] for that.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::record::{Fields, ItemId, Record};

/// Ordered sequence of records, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Records in insertion order. Deletion keeps the survivors' order.
    #[serde(default)]
    items: Vec<Record>,
}

impl Collection {
    /// An empty collection.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All records in their current order.
    pub const fn list(&self) -> &[Record] {
        self.items.as_slice()
    }

    /// Number of records.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record whose identifier equals `id`.
    pub fn find_by_id(&self, id: ItemId) -> Option<&Record> {
        self.items.iter().find(|record| record.id() == Some(id))
    }

    /// The identifier the next [`insert`](Self::insert) will assign.
    ///
    /// This is the last record's identifier plus one, not the maximum
    /// identifier plus one. After the most recently inserted record is
    /// removed, the next insert reuses its identifier, and a collection
    /// whose last record carries a lower id than an earlier one can hand
    /// out a duplicate. Existing clients depend on this numbering, so it is
    /// kept as-is. A last record without an integer id counts as 0.
    pub fn next_id(&self) -> Result<ItemId, StoreError> {
        match self.items.last().and_then(Record::id) {
            Some(last) => last.next().ok_or(StoreError::IdOverflow(last)),
            None => Ok(ItemId::FIRST),
        }
    }

    /// Append a record built from `fields` under a freshly assigned
    /// identifier and return a copy of it.
    pub fn insert(&mut self, fields: Fields) -> Result<Record, StoreError> {
        let id = self.next_id()?;
        let record = Record::with_id(id, fields);
        self.items.push(record.clone());
        Ok(record)
    }

    /// Shallow-merge `patch` into the record matching `id` and return the
    /// merged record, or `None` if no record matches.
    ///
    /// A patch carrying its own `id` field overwrites the identifier.
    pub fn update(&mut self, id: ItemId, patch: Fields) -> Option<Record> {
        let record = self
            .items
            .iter_mut()
            .find(|record| record.id() == Some(id))?;
        record.merge(patch);
        Some(record.clone())
    }

    /// Remove every record matching `id`, returning how many were removed.
    /// Removing an absent identifier is not an error.
    pub fn remove(&mut self, id: ItemId) -> usize {
        let before = self.items.len();
        self.items.retain(|record| record.id() != Some(id));
        before.saturating_sub(self.items.len())
    }
}

impl From<Vec<Record>> for Collection {
    fn from(items: Vec<Record>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn ids(collection: &Collection) -> Vec<Option<ItemId>> {
        collection.list().iter().map(Record::id).collect()
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let collection = Collection::new();
        assert!(collection.list().is_empty());
        assert_eq!(collection.next_id().unwrap(), ItemId(1));
    }

    #[test]
    fn inserts_get_increasing_ids_in_order() {
        let mut collection = Collection::new();
        for title in ["A", "B", "C"] {
            collection.insert(fields(json!({ "title": title }))).unwrap();
        }
        assert_eq!(ids(&collection), vec![Some(ItemId(1)), Some(ItemId(2)), Some(ItemId(3))]);
        let titles: Vec<&Value> = collection.list().iter().map(|r| &r.fields()["title"]).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn insert_returns_exactly_caller_fields_plus_id() {
        let mut collection = Collection::new();
        let record = collection
            .insert(fields(json!({"title": "A", "tags": ["x"], "done": false})))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": 1, "title": "A", "tags": ["x"], "done": false})
        );
    }

    #[test]
    fn find_after_insert_returns_equal_record() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        let inserted = collection.insert(fields(json!({"title": "B"}))).unwrap();
        let found = collection.find_by_id(inserted.id().unwrap()).unwrap();
        assert_eq!(found, &inserted);
    }

    #[test]
    fn find_missing_is_none() {
        let collection = Collection::new();
        assert!(collection.find_by_id(ItemId(999)).is_none());
    }

    #[test]
    fn update_merges_fields() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        let updated = collection
            .update(ItemId(1), fields(json!({"description": "x"})))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            json!({"id": 1, "title": "A", "description": "x"})
        );
        assert_eq!(collection.find_by_id(ItemId(1)), Some(&updated));
    }

    #[test]
    fn update_with_empty_patch_is_identity() {
        let mut collection = Collection::new();
        let original = collection
            .insert(fields(json!({"title": "A", "n": 3})))
            .unwrap();
        let updated = collection.update(ItemId(1), Fields::new()).unwrap();
        assert_eq!(updated, original);
    }

    #[test]
    fn update_missing_is_none_and_leaves_collection() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        let before = collection.clone();
        assert!(collection.update(ItemId(2), fields(json!({"title": "B"}))).is_none());
        assert_eq!(collection, before);
    }

    #[test]
    fn update_can_rewrite_identifier() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        let updated = collection.update(ItemId(1), fields(json!({"id": 10}))).unwrap();
        assert_eq!(updated.id(), Some(ItemId(10)));
        assert!(collection.find_by_id(ItemId(1)).is_none());
        assert_eq!(collection.next_id().unwrap(), ItemId(11));
    }

    #[test]
    fn remove_then_find_is_none() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        collection.insert(fields(json!({"title": "B"}))).unwrap();
        assert_eq!(collection.remove(ItemId(1)), 1);
        assert!(collection.find_by_id(ItemId(1)).is_none());
        assert_eq!(ids(&collection), vec![Some(ItemId(2))]);
    }

    #[test]
    fn remove_missing_leaves_collection_unchanged() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        let before = collection.clone();
        assert_eq!(collection.remove(ItemId(42)), 0);
        assert_eq!(collection, before);
    }

    #[test]
    fn remove_keeps_survivor_order() {
        let mut collection = Collection::new();
        for title in ["A", "B", "C", "D"] {
            collection.insert(fields(json!({ "title": title }))).unwrap();
        }
        collection.remove(ItemId(2));
        assert_eq!(ids(&collection), vec![Some(ItemId(1)), Some(ItemId(3)), Some(ItemId(4))]);
    }

    #[test]
    fn remove_drops_every_duplicate() {
        let mut collection = Collection::from(vec![
            Record::from(fields(json!({"id": 1, "title": "A"}))),
            Record::from(fields(json!({"id": 1, "title": "B"}))),
        ]);
        assert_eq!(collection.remove(ItemId(1)), 2);
        assert!(collection.is_empty());
    }

    #[test]
    fn next_id_follows_last_record_not_maximum() {
        let mut collection = Collection::new();
        collection.insert(fields(json!({"title": "A"}))).unwrap();
        collection.insert(fields(json!({"title": "B"}))).unwrap();
        collection.remove(ItemId(2));
        let reused = collection.insert(fields(json!({"title": "C"}))).unwrap();
        assert_eq!(reused.id(), Some(ItemId(2)));

        let mut out_of_order = Collection::from(vec![
            Record::from(fields(json!({"id": 5}))),
            Record::from(fields(json!({"id": 2}))),
        ]);
        let record = out_of_order.insert(Fields::new()).unwrap();
        assert_eq!(record.id(), Some(ItemId(3)));
    }

    #[test]
    fn next_id_after_non_integer_last_id_starts_at_one() {
        let collection = Collection::from(vec![Record::from(fields(json!({"id": "x"})))]);
        assert_eq!(collection.next_id().unwrap(), ItemId(1));
    }

    #[test]
    fn insert_after_max_id_overflows() {
        let mut collection = Collection::from(vec![Record::from(fields(json!({"id": i64::MAX})))]);
        let err = collection.insert(Fields::new()).unwrap_err();
        assert!(matches!(err, StoreError::IdOverflow(ItemId(i64::MAX))));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn document_without_items_decodes_empty() {
        let collection: Collection = serde_json::from_value(json!({})).unwrap();
        assert!(collection.is_empty());
    }
}
