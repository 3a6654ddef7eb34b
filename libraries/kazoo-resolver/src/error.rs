/// Resolver-specific errors
use thiserror::Error;

/// Resolver error types
#[derive(Error, Debug)]
pub enum ResolverError {
    /// `yt-dlp` could not be spawned
    #[error("Failed to run yt-dlp: {0}")]
    Spawn(#[from] std::io::Error),

    /// `yt-dlp` exited with a failure status
    #[error("yt-dlp failed for '{input}': {stderr}")]
    CommandFailed { input: String, stderr: String },

    /// `yt-dlp` produced output we could not parse
    #[error("Unreadable yt-dlp output: {0}")]
    Parse(#[from] serde_json::Error),

    /// A search returned nothing
    #[error("No results for '{0}'")]
    NoResults(String),
}

impl From<ResolverError> for kazoo_core::KazooError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::NoResults(query) => kazoo_core::KazooError::not_found("Song", query),
            other => kazoo_core::KazooError::Other(other.to_string()),
        }
    }
}
