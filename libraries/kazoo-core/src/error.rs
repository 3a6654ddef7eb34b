/// Core error types for Kazoo
use thiserror::Error;

/// Result type alias using `KazooError`
pub type Result<T> = std::result::Result<T, KazooError>;

/// Core error type for Kazoo
#[derive(Error, Debug)]
pub enum KazooError {
    /// The user or the bot is not in a voice channel
    #[error("Not connected to a voice channel")]
    NotConnected,

    /// Resolver found nothing, or a song/user is absent from the store
    #[error("{entity} not found: {reference}")]
    NotFound { entity: String, reference: String },

    /// Duplicate playlist entry (reported, not raised, by the store)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Voice connect/stream/pause/resume failure
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Invalid request from a caller (e.g., out-of-range queue position)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Illegal playback status transition
    #[error("Illegal status transition: {from} -> {attempted}")]
    IllegalTransition { from: String, attempted: String },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl KazooError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            reference: reference.into(),
        }
    }

    /// Create a transport failure
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportFailure(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for KazooError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
