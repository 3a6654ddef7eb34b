//! Voice transport abstraction
//!
//! The coordinator never talks to Discord directly; it drives whatever
//! implements [`Transport`] and listens for [`TransportEvent`]s on a
//! channel the transport writes to.

use async_trait::async_trait;
use kazoo_core::types::Song;
use kazoo_core::Result;
use std::path::PathBuf;

/// What to feed the audio pipeline for one song
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSource {
    /// A previously downloaded local file
    File(PathBuf),
    /// A URL streamed on the fly
    Remote(String),
}

impl PlaybackSource {
    /// Pick the source for a song, preferring a recorded local file
    pub fn for_song(song: &Song) -> Self {
        match &song.file_path {
            Some(path) => Self::File(path.clone()),
            None => Self::Remote(song.url.clone()),
        }
    }
}

/// Notifications from the transport back to the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The current stream finished, was stopped, or errored out
    StreamEnded { song_url: String },
}

/// Voice-channel audio transport
///
/// Implementations must be safe to call from concurrent tasks; the
/// coordinator serializes its own operations but the transport may also
/// see calls from connection housekeeping.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Join the target voice channel; a no-op when already connected
    async fn connect(&self) -> Result<()>;

    /// Whether a voice connection is currently up
    async fn is_connected(&self) -> bool;

    /// Start streaming a source, replacing whatever was playing
    async fn play(&self, source: &PlaybackSource, song_url: &str) -> Result<()>;

    /// Stop the current stream
    async fn stop(&self) -> Result<()>;

    /// Pause the current stream
    async fn pause(&self) -> Result<()>;

    /// Resume a paused stream
    async fn resume(&self) -> Result<()>;

    /// Leave the voice channel; a no-op when not connected
    async fn disconnect(&self) -> Result<()>;
}
