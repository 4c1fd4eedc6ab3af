pub mod api;
pub mod config;
pub mod error;
pub mod flatten;
pub mod index;
pub mod metrics;
pub mod models;
pub mod query;
pub mod store;
pub mod tokenizer;
pub mod validate;

pub use api::{create_router, AppState};
pub use config::{IndexSettings, ServerConfig};
pub use error::{MetadexError, Result};
pub use flatten::{FlatField, Flatten, FlattenValue};
pub use index::InvertedIndex;
pub use metrics::StoreMetrics;
pub use models::*;
pub use store::{Database, MetadataStore, WriteOutcome};
pub use validate::Validate;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
