//! # Resource Store
//!
//! In-memory ordered collections backing the resource controllers.
//!
//! A store is constructed explicitly and handed to its controller; there is
//! no module-level shared state, so tests can build isolated instances.

use crate::model::Record;

/// An ordered, mutable, in-memory collection of records for one resource
/// type.
///
/// Collection order is insertion order. Deletion removes the exact element
/// and preserves the relative order of the rest.
#[derive(Debug)]
pub struct ResourceStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> ResourceStore<R> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// The full ordered sequence of records, no filtering.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// The record with matching id, if any.
    pub fn find_by_id(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Mutable access to the record with matching id, if any.
    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// The id the next created record receives: current length + 1.
    ///
    /// After a deletion the next create can re-issue an id a client still
    /// holds. Callers depend on the length-based value, so this is not a
    /// monotonic counter.
    pub fn next_id(&self) -> u64 {
        self.records.len() as u64 + 1
    }

    /// Appends `record` at the end and returns a reference to it.
    pub fn append(&mut self, record: R) -> &R {
        self.records.push(record);
        // push guarantees a last element
        &self.records[self.records.len() - 1]
    }

    /// Removes the first record with matching id. Returns whether a removal
    /// occurred.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_users, Fruit, User};

    fn fruit(id: u64, name: &str, color: &str) -> Fruit {
        Fruit {
            id,
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_empty_store() {
        let store: ResourceStore<Fruit> = ResourceStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert!(store.find_by_id(1).is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = ResourceStore::new();
        store.append(fruit(1, "Apple", "red"));
        store.append(fruit(2, "Banana", "yellow"));
        store.append(fruit(3, "Cherry", "red"));

        let names: Vec<_> = store.list().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_find_by_id() {
        let mut store = ResourceStore::new();
        store.append(fruit(1, "Apple", "red"));
        store.append(fruit(2, "Banana", "yellow"));

        assert_eq!(store.find_by_id(2).map(|f| f.name.as_str()), Some("Banana"));
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn test_remove_by_id_keeps_relative_order() {
        let mut store = ResourceStore::with_records(seed_users());

        assert!(store.remove_by_id(2));
        assert_eq!(store.len(), 2);
        let ids: Vec<_> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_remove_missing_id_reports_false() {
        let mut store: ResourceStore<User> = ResourceStore::new();
        assert!(!store.remove_by_id(1));
    }

    #[test]
    fn test_next_id_is_length_plus_one() {
        let mut store = ResourceStore::new();
        assert_eq!(store.next_id(), 1);
        store.append(fruit(1, "Apple", "red"));
        store.append(fruit(2, "Banana", "yellow"));
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_next_id_reuses_ids_after_deletion() {
        let mut store = ResourceStore::new();
        store.append(fruit(1, "Apple", "red"));
        store.append(fruit(2, "Banana", "yellow"));
        store.remove_by_id(1);

        // one record left, so the next id collides with the survivor
        assert_eq!(store.next_id(), 2);
    }
}
