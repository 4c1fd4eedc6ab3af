use thiserror::Error;
use uuid::Uuid;

/// Main error type for metadex operations
#[derive(Error, Debug)]
pub enum MetadexError {
    #[error("no such field name {0}")]
    NoSuchField(String),

    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidPaging(String),
}

/// Result type alias for metadex operations
pub type Result<T> = std::result::Result<T, MetadexError>;

impl MetadexError {
    /// Check if this error was caused by client input rather than the store itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MetadexError::NoSuchField(_)
                | MetadexError::Validation(_)
                | MetadexError::InvalidPaging(_)
        )
    }
}
