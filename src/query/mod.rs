//! Query-side components: predicate filtering and pagination

pub mod filter;
pub mod paging;

pub use filter::{filter_records, PredicateMap};
pub use paging::{page_results, parse_paging, PageParams};

use axum::http::Uri;
use url::form_urlencoded;

/// Decode a request query string into a predicate map.
///
/// Every value position is preserved so the first-value-wins policy is
/// applied by the filter, not by the decoder.
pub fn parse_query(uri: &Uri) -> PredicateMap {
    let mut predicates = PredicateMap::new();
    if let Some(raw) = uri.query() {
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            predicates
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }
    predicates
}
