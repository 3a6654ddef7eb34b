//! Playlist queries
//!
//! Each user has a single implicit playlist: a set of songs with no
//! ordering guarantees beyond insertion. Membership is unique per
//! `(user, song)` pair.

use crate::error::{Result, StorageError};
use crate::songs::song_from_row;
use kazoo_core::types::Song;
use sqlx::{Row, SqlitePool};

/// Add a song to a user's playlist
///
/// Returns `true` when the song was already present, in which case
/// nothing changes.
pub async fn add(pool: &SqlitePool, user_id: i64, song_id: i64) -> Result<bool> {
    let existing = sqlx::query(
        "SELECT 1 FROM playlist_entries WHERE user_id = ? AND song_id = ?",
    )
    .bind(user_id)
    .bind(song_id)
    .fetch_optional(pool)
    .await?;

    if existing.is_some() {
        return Ok(true);
    }

    sqlx::query("INSERT INTO playlist_entries (user_id, song_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(song_id)
        .execute(pool)
        .await?;

    Ok(false)
}

/// Remove a song from a user's playlist by its URL
pub async fn remove(pool: &SqlitePool, user_id: i64, song_url: &str) -> Result<()> {
    let result = sqlx::query(
        "DELETE FROM playlist_entries
         WHERE user_id = ?
           AND song_id = (SELECT id FROM songs WHERE url = ?)",
    )
    .bind(user_id)
    .bind(song_url)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Playlist entry", song_url));
    }

    Ok(())
}

/// All songs in a user's playlist, oldest first
pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.url, s.file_path, s.thumbnail, s.upvotes
         FROM playlist_entries p
         INNER JOIN songs s ON p.song_id = s.id
         WHERE p.user_id = ?
         ORDER BY p.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// How many songs a user has saved
pub async fn count(pool: &SqlitePool, user_id: i64) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM playlist_entries WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get("n"))
}
