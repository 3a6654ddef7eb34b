//! Kazoo Resolver
//!
//! Turns chat input (a URL or free-text search) into song metadata, and
//! downloads audio to local files, by shelling out to `yt-dlp`.
//!
//! # Example
//!
//! ```rust,no_run
//! use kazoo_resolver::{Resolver, YtDlpResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = YtDlpResolver::new("yt-dlp", "./songs");
//! let song = resolver.resolve("never gonna give you up").await?;
//! println!("{} <{}>", song.title, song.url);
//! # Ok(())
//! # }
//! ```

mod error;
mod ytdlp;

pub use error::ResolverError;
pub use ytdlp::YtDlpResolver;

use async_trait::async_trait;
use std::path::PathBuf;

/// Result type alias using `ResolverError`
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Metadata for a resolved song, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSong {
    pub title: String,
    pub url: String,
    pub thumbnail: Option<String>,
}

/// Resolves chat input into playable songs
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve a URL or free-text query into song metadata
    ///
    /// Free text is treated as a search and the first hit wins.
    async fn resolve(&self, query: &str) -> Result<ResolvedSong>;

    /// Download the audio for a URL, returning the local file path
    async fn download(&self, url: &str) -> Result<PathBuf>;
}

/// Whether chat input should be treated as a direct URL
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::is_url;

    #[test]
    fn url_detection() {
        assert!(is_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_url("http://example.com/track"));
        assert!(!is_url("never gonna give you up"));
        assert!(!is_url("www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_url(""));
    }
}
