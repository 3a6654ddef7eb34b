//! `SQLite`-backed implementation of the `SongStore` contract
//!
//! `SqliteSongStore` is a thin facade over the per-feature query modules;
//! it owns the pool and translates `StorageError` into `KazooError` at the
//! trait boundary.

use async_trait::async_trait;
use kazoo_core::types::{BotStatus, QueueEntry, Song, User};
use kazoo_core::{Result, SongStore};
use sqlx::SqlitePool;
use std::path::Path;

use crate::{credentials, playlists, queue, songs, status, users};

/// `SQLite`-backed song store
#[derive(Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    /// Create a store over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Stored password hash for a user, if any
    pub async fn get_password_hash(&self, user: &User) -> Result<Option<String>> {
        Ok(credentials::get_password_hash(&self.pool, user.id).await?)
    }

    /// Insert or replace a user's password hash
    pub async fn set_password_hash(&self, user: &User, hash: &str) -> Result<()> {
        Ok(credentials::set_password_hash(&self.pool, user.id, hash).await?)
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn get_or_create_song(
        &self,
        title: &str,
        url: &str,
        thumbnail: Option<&str>,
    ) -> Result<Song> {
        Ok(songs::get_or_create(&self.pool, title, url, thumbnail).await?)
    }

    async fn get_song_by_url(&self, url: &str) -> Result<Option<Song>> {
        Ok(songs::get_by_url(&self.pool, url).await?)
    }

    async fn set_file_path(&self, url: &str, path: &Path) -> Result<()> {
        Ok(songs::set_file_path(&self.pool, url, path).await?)
    }

    async fn upvote_song(&self, url: &str) -> Result<Song> {
        Ok(songs::upvote(&self.pool, url).await?)
    }

    async fn get_or_create_user(&self, name: &str) -> Result<User> {
        Ok(users::get_or_create(&self.pool, name).await?)
    }

    async fn enqueue(&self, song: &Song, user: &User) -> Result<()> {
        Ok(queue::enqueue(&self.pool, song.id, user.id).await?)
    }

    async fn peek_head(&self) -> Result<Option<(Song, User)>> {
        Ok(queue::peek_head(&self.pool).await?)
    }

    async fn pop_head_for(&self, song_url: &str) -> Result<bool> {
        Ok(queue::pop_head_for(&self.pool, song_url).await?)
    }

    async fn list_queue(&self) -> Result<Vec<QueueEntry>> {
        Ok(queue::list(&self.pool).await?)
    }

    async fn remove_position(&self, position: usize) -> Result<QueueEntry> {
        Ok(queue::remove_position(&self.pool, position).await?)
    }

    async fn clear_queue(&self) -> Result<()> {
        Ok(queue::clear(&self.pool).await?)
    }

    async fn add_to_playlist(&self, user: &User, song: &Song) -> Result<bool> {
        Ok(playlists::add(&self.pool, user.id, song.id).await?)
    }

    async fn remove_from_playlist(&self, user: &User, song_url: &str) -> Result<()> {
        Ok(playlists::remove(&self.pool, user.id, song_url).await?)
    }

    async fn get_playlist(&self, user: &User) -> Result<Vec<Song>> {
        Ok(playlists::list(&self.pool, user.id).await?)
    }

    async fn get_status(&self) -> Result<BotStatus> {
        Ok(status::get(&self.pool).await?)
    }

    async fn set_status(&self, status: BotStatus) -> Result<()> {
        Ok(status::set(&self.pool, status).await?)
    }

    async fn reset_status(&self) -> Result<()> {
        Ok(status::reset(&self.pool).await?)
    }
}
