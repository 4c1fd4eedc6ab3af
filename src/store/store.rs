//! The metadata store: record collection and inverted index behind one lock

use parking_lot::RwLock;
use uuid::Uuid;

use super::database::Database;
use crate::config::IndexSettings;
use crate::error::{MetadexError, Result};
use crate::index::InvertedIndex;
use crate::models::Metadata;
use crate::query::filter::{filter_records, PredicateMap};

/// Write outcome distinguishing a create from a replace
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Replaced,
}

/// Owns the (database, index) pair.
///
/// A single lock covers both structures: every write runs remove-stale-
/// entries, swap-record, add-fresh-entries as one critical section, so a
/// reader can never observe a record present in the database but missing
/// from the index, or the reverse. Constructed once at startup and shared
/// with the HTTP layer through an `Arc`.
pub struct MetadataStore {
    state: RwLock<StoreState>,
}

struct StoreState {
    database: Database,
    index: InvertedIndex,
}

impl MetadataStore {
    pub fn new(settings: IndexSettings) -> Self {
        Self {
            state: RwLock::new(StoreState {
                database: Database::new(),
                index: InvertedIndex::new(&settings),
            }),
        }
    }

    /// Insert or replace the record under its id.
    ///
    /// When the id already exists its old index entries are removed before
    /// the new ones are added, so no stale postings survive the swap. The
    /// record's id must already be resolved by the caller.
    pub fn upsert(&self, record: Metadata) -> WriteOutcome {
        let mut state = self.state.write();
        let id = record.id;

        let outcome = if state.database.contains(id) {
            state.index.remove(id);
            WriteOutcome::Replaced
        } else {
            WriteOutcome::Created
        };

        state.index.add(&record, id);
        state.database.insert(record);
        outcome
    }

    /// Remove a record and every index entry that references it
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write();
        if !state.database.contains(id) {
            return Err(MetadexError::RecordNotFound(id));
        }
        state.index.remove(id);
        state.database.remove(id);
        Ok(())
    }

    /// Fetch a single record by id
    pub fn get(&self, id: Uuid) -> Option<Metadata> {
        self.state.read().database.get(id).cloned()
    }

    /// Filter the live records by the given predicates
    pub fn search(&self, predicates: &PredicateMap) -> Result<Vec<Metadata>> {
        let state = self.state.read();
        filter_records(predicates, &state.database, &state.index)
    }

    /// Number of live records
    pub fn total_records(&self) -> usize {
        self.state.read().database.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Maintainer;
    use url::Url;

    fn record(id: Uuid, title: &str, description: &str) -> Metadata {
        Metadata {
            id,
            title: title.to_string(),
            version: "1.0.0".to_string(),
            maintainers: vec![Maintainer {
                name: "someone".to_string(),
                email: "someone@example.com".to_string(),
            }],
            company: "Acme".to_string(),
            website: Url::parse("https://example.com").unwrap(),
            source: Url::parse("https://github.com/example/app").unwrap(),
            license: "MIT".to_string(),
            description: description.to_string(),
        }
    }

    fn predicates(pairs: &[(&str, &str)]) -> PredicateMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn test_upsert_then_search_by_id() {
        let store = MetadataStore::new(IndexSettings::default());
        let id = Uuid::new_v4();
        assert_eq!(
            store.upsert(record(id, "App", "does things")),
            WriteOutcome::Created
        );

        let results = store
            .search(&predicates(&[("id", &id.to_string())]))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, id);
    }

    #[test]
    fn test_replace_removes_stale_postings() {
        let store = MetadataStore::new(IndexSettings::default());
        let id = Uuid::new_v4();
        store.upsert(record(id, "Old Title", "first version"));

        assert_eq!(
            store.upsert(record(id, "New Title", "second version")),
            WriteOutcome::Replaced
        );

        assert!(store
            .search(&predicates(&[("title", "Old Title")]))
            .unwrap()
            .is_empty());
        let results = store
            .search(&predicates(&[("title", "New Title")]))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, id);
        assert_eq!(store.total_records(), 1);
    }

    #[test]
    fn test_delete_removes_record_and_postings() {
        let store = MetadataStore::new(IndexSettings::default());
        let id = Uuid::new_v4();
        store.upsert(record(id, "App", "something unique"));

        store.delete(id).unwrap();

        assert!(store.get(id).is_none());
        assert_eq!(store.total_records(), 0);
        assert!(store
            .search(&predicates(&[("title", "App")]))
            .unwrap()
            .is_empty());
        assert!(matches!(
            store.delete(id),
            Err(MetadexError::RecordNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_get_unknown_id() {
        let store = MetadataStore::new(IndexSettings::default());
        assert!(store.get(Uuid::new_v4()).is_none());
    }
}
