//! Multi-predicate AND filtering over the live record set

use std::collections::BTreeMap;

use crate::error::{MetadexError, Result};
use crate::index::InvertedIndex;
use crate::models::Metadata;
use crate::store::Database;

/// Query predicates: field path -> values as they appeared in the request.
///
/// Only the first value of each predicate is significant. The ordered map
/// keeps evaluation order stable across identical requests.
pub type PredicateMap = BTreeMap<String, Vec<String>>;

/// Apply every predicate to the database's records, preserving insertion
/// order.
///
/// A predicate on a field path the index has never seen fails with
/// [`MetadexError::NoSuchField`], even when the database is empty; a known
/// field with an unmatched value just narrows the result to nothing. Once
/// the working set is empty the remaining predicates are only checked for
/// field existence.
pub fn filter_records(
    predicates: &PredicateMap,
    database: &Database,
    index: &InvertedIndex,
) -> Result<Vec<Metadata>> {
    let mut results: Vec<Metadata> = database.iter_ordered().cloned().collect();

    for (field, values) in predicates {
        if !index.contains_field(field) {
            return Err(MetadexError::NoSuchField(field.clone()));
        }
        if results.is_empty() {
            continue;
        }

        let value = values.first().map(String::as_str).unwrap_or_default();
        let matched = index.postings(field, value);
        results.retain(|record| matched.is_some_and(|ids| ids.contains(&record.id)));
    }

    Ok(results)
}
