//! Inverted index over flattened record fields
//!
//! Two-level mapping: field path -> field value -> posting set of record
//! ids. An id appears under (path, value) iff the live record with that id
//! currently flattens to that value at that path; the write path owns the
//! consistency invariant and must remove a record's entries before
//! re-adding them under a reused id.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::config::IndexSettings;
use crate::flatten::{FlatField, Flatten};
use crate::tokenizer::value_words;

type PostingSet = HashSet<Uuid>;
type ValueBuckets = HashMap<String, PostingSet>;

/// Exact-value and word-level inverted index
#[derive(Clone, Debug)]
pub struct InvertedIndex {
    entries: HashMap<String, ValueBuckets>,
    index_words: bool,
}

impl InvertedIndex {
    pub fn new(settings: &IndexSettings) -> Self {
        Self {
            entries: HashMap::new(),
            index_words: settings.index_words,
        }
    }

    /// Add every flattened field of `record` under `id`.
    ///
    /// Each value is indexed whole; when word indexing is enabled and the
    /// value splits into two or more whitespace-delimited words, every
    /// cleaned word is indexed as well.
    pub fn add(&mut self, record: &impl Flatten, id: Uuid) {
        for field in record.flatten() {
            let FlatField { path, value } = field;
            let buckets = self.entries.entry(path).or_default();
            if self.index_words {
                for word in value_words(&value) {
                    buckets.entry(word.to_string()).or_default().insert(id);
                }
            }
            buckets.entry(value).or_default().insert(id);
        }
    }

    /// Remove `id` from every posting set, pruning value buckets that
    /// become empty.
    ///
    /// Walks the whole index rather than keeping a per-record reverse map;
    /// cost is proportional to total index size. Field-level entries
    /// survive, so a field that was ever indexed stays queryable.
    pub fn remove(&mut self, id: Uuid) {
        for buckets in self.entries.values_mut() {
            buckets.retain(|_, ids| {
                ids.remove(&id);
                !ids.is_empty()
            });
        }
    }

    /// Whether `path` has ever been indexed
    pub fn contains_field(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Posting set for an exact (path, value) pair
    pub fn postings(&self, path: &str, value: &str) -> Option<&PostingSet> {
        self.entries.get(path)?.get(value)
    }

    /// Number of field paths known to the index
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }
}
