//! Record storage: the ordered collection and the store that pairs it with
//! the inverted index

pub mod database;
pub mod store;

pub use database::Database;
pub use store::{MetadataStore, WriteOutcome};
