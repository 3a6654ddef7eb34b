/// Core traits for Kazoo
use crate::error::Result;
use crate::types::{BotStatus, QueueEntry, Song, User};
use async_trait::async_trait;
use std::path::Path;

/// Song store trait
///
/// The persistence contract the playback coordinator and the request
/// handlers are written against. The store is the single source of truth
/// for songs, users, the play queue, playlists, and the bot status row;
/// the coordinator keeps only transient in-memory flags that can always be
/// reconciled from this state.
#[async_trait]
pub trait SongStore: Send + Sync {
    // Song operations

    /// Fetch the song with this URL, inserting it first if unknown
    async fn get_or_create_song(
        &self,
        title: &str,
        url: &str,
        thumbnail: Option<&str>,
    ) -> Result<Song>;

    /// Look up a song by URL
    async fn get_song_by_url(&self, url: &str) -> Result<Option<Song>>;

    /// Record the local file path after a successful download
    async fn set_file_path(&self, url: &str, path: &Path) -> Result<()>;

    /// Increment a song's upvote count, returning the updated song
    async fn upvote_song(&self, url: &str) -> Result<Song>;

    // User operations

    /// Fetch the user with this name, inserting it first if unknown
    async fn get_or_create_user(&self, name: &str) -> Result<User>;

    // Queue operations

    /// Append a queue entry at the tail; does not start playback
    async fn enqueue(&self, song: &Song, user: &User) -> Result<()>;

    /// Head entry, if any, without removing it
    async fn peek_head(&self) -> Result<Option<(Song, User)>>;

    /// Remove the head entry if it references this song
    ///
    /// Returns whether an entry was removed. Idempotent: a second call for
    /// an already-removed head is a no-op.
    async fn pop_head_for(&self, song_url: &str) -> Result<bool>;

    /// All entries in play order
    async fn list_queue(&self) -> Result<Vec<QueueEntry>>;

    /// Remove the entry at a zero-based position
    ///
    /// Fails with `InvalidRequest` when the position is out of range.
    async fn remove_position(&self, position: usize) -> Result<QueueEntry>;

    /// Drop every queue entry
    async fn clear_queue(&self) -> Result<()>;

    // Playlist operations

    /// Add a song to a user's playlist
    ///
    /// Returns `true` when the pair was already present (reported, never
    /// raised); the playlist is unchanged in that case.
    async fn add_to_playlist(&self, user: &User, song: &Song) -> Result<bool>;

    /// Remove a song from a user's playlist
    async fn remove_from_playlist(&self, user: &User, song_url: &str) -> Result<()>;

    /// All songs in a user's playlist
    async fn get_playlist(&self, user: &User) -> Result<Vec<Song>>;

    // Status operations

    /// Current persisted status (Stopped when the row is absent)
    async fn get_status(&self) -> Result<BotStatus>;

    /// Persist a new status along with the owning process id
    async fn set_status(&self, status: BotStatus) -> Result<()>;

    /// Clear the status table back to Stopped (process start, leave)
    async fn reset_status(&self) -> Result<()>;
}
