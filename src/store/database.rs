//! Ordered record collection keyed by identifier

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Metadata;

/// Ordered collection of records keyed by id.
///
/// Insertion order is preserved and defines the default listing order.
/// Replacing a record swaps the whole value and keeps its original
/// position.
#[derive(Clone, Debug, Default)]
pub struct Database {
    records: HashMap<Uuid, Metadata>,
    ordering: Vec<Uuid>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous record when replacing
    pub fn insert(&mut self, record: Metadata) -> Option<Metadata> {
        let id = record.id;
        let previous = self.records.insert(id, record);
        if previous.is_none() {
            self.ordering.push(id);
        }
        previous
    }

    /// Remove a record, returning it when present
    pub fn remove(&mut self, id: Uuid) -> Option<Metadata> {
        let removed = self.records.remove(&id);
        if removed.is_some() {
            self.ordering.retain(|existing| *existing != id);
        }
        removed
    }

    pub fn get(&self, id: Uuid) -> Option<&Metadata> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.records.contains_key(&id)
    }

    /// Records in insertion order
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Metadata> {
        self.ordering.iter().filter_map(|id| self.records.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
