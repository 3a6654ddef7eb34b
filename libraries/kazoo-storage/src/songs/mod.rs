//! Song queries
//!
//! Songs are keyed by URL and never deleted; only queue and playlist
//! entries referencing them come and go.

use crate::error::{Result, StorageError};
use kazoo_core::types::Song;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};

pub(crate) fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        url: row.get("url"),
        file_path: row
            .get::<Option<String>, _>("file_path")
            .map(PathBuf::from),
        thumbnail: row.get("thumbnail"),
        upvotes: row.get("upvotes"),
    }
}

/// Look up a song by its URL
pub async fn get_by_url(pool: &SqlitePool, url: &str) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, url, file_path, thumbnail, upvotes FROM songs WHERE url = ?",
    )
    .bind(url)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(song_from_row))
}

/// Fetch the song with this URL, inserting it first if unknown
///
/// Inserting an already-known URL is a no-op; the existing row (including
/// any recorded file path) wins.
pub async fn get_or_create(
    pool: &SqlitePool,
    title: &str,
    url: &str,
    thumbnail: Option<&str>,
) -> Result<Song> {
    sqlx::query(
        "INSERT INTO songs (title, url, thumbnail) VALUES (?, ?, ?)
         ON CONFLICT(url) DO NOTHING",
    )
    .bind(title)
    .bind(url)
    .bind(thumbnail)
    .execute(pool)
    .await?;

    get_by_url(pool, url)
        .await?
        .ok_or_else(|| StorageError::not_found("Song", url))
}

/// Increment a song's upvote count, returning the updated row
pub async fn upvote(pool: &SqlitePool, url: &str) -> Result<Song> {
    let result = sqlx::query("UPDATE songs SET upvotes = upvotes + 1 WHERE url = ?")
        .bind(url)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Song", url));
    }

    get_by_url(pool, url)
        .await?
        .ok_or_else(|| StorageError::not_found("Song", url))
}

/// Record the local file path after a successful download
pub async fn set_file_path(pool: &SqlitePool, url: &str, path: &Path) -> Result<()> {
    let result = sqlx::query("UPDATE songs SET file_path = ? WHERE url = ?")
        .bind(path.to_string_lossy().into_owned())
        .bind(url)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Song", url));
    }

    Ok(())
}
