/// Song domain type
use super::SongId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A song known to the bot
///
/// Identity is by `url`: a song row is created the first time a reference
/// resolves to that URL and is never deleted. Only queue and playlist
/// *entries* pointing at it come and go. `file_path` is set once a local
/// download succeeds; until then playback streams from the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Display title
    pub title: String,

    /// Canonical watch URL (unique)
    pub url: String,

    /// Local audio file, present after a successful download
    pub file_path: Option<PathBuf>,

    /// Thumbnail URL for display embeds
    pub thumbnail: Option<String>,

    /// Upvote count
    pub upvotes: i64,
}

impl Song {
    /// Create a song with no id assigned yet (id 0 until stored)
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            url: url.into(),
            file_path: None,
            thumbnail: None,
            upvotes: 0,
        }
    }

    /// Attach a thumbnail URL
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}
