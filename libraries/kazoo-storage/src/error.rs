/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {reference}")]
    NotFound { entity: String, reference: String },

    /// Caller-supplied position/argument out of range
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            reference: reference.into(),
        }
    }
}

impl From<StorageError> for kazoo_core::KazooError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, reference } => {
                kazoo_core::KazooError::NotFound { entity, reference }
            }
            StorageError::InvalidRequest(msg) => kazoo_core::KazooError::InvalidRequest(msg),
            other => kazoo_core::KazooError::database(other.to_string()),
        }
    }
}
