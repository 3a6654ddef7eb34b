//! Play queue queries
//!
//! The queue table's rowid doubles as the play order: the head is the
//! entry with the smallest id. The head entry is removed when its song
//! finishes, is skipped, or errors during streaming.

use crate::error::{Result, StorageError};
use crate::songs::song_from_row;
use kazoo_core::types::{QueueEntry, Song, User};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const QUEUE_SELECT: &str = "
    SELECT
        q.id AS queue_id,
        s.id, s.title, s.url, s.file_path, s.thumbnail, s.upvotes,
        u.id AS user_id, u.name AS user_name, u.created_at AS user_created_at
    FROM song_queue q
    INNER JOIN songs s ON q.song_id = s.id
    INNER JOIN users u ON q.user_id = u.id
";

fn pair_from_row(row: &SqliteRow) -> (Song, User) {
    let song = song_from_row(row);
    let user = User {
        id: row.get("user_id"),
        name: row.get("user_name"),
        created_at: row.get("user_created_at"),
    };
    (song, user)
}

/// Append an entry at the tail of the queue
pub async fn enqueue(pool: &SqlitePool, song_id: i64, user_id: i64) -> Result<()> {
    sqlx::query("INSERT INTO song_queue (song_id, user_id) VALUES (?, ?)")
        .bind(song_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// The head entry, if any, without removing it
pub async fn peek_head(pool: &SqlitePool) -> Result<Option<(Song, User)>> {
    let row = sqlx::query(&format!("{QUEUE_SELECT} ORDER BY q.id LIMIT 1"))
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(pair_from_row))
}

/// Remove the head entry if it references this song URL
///
/// Only the head can be removed this way, so a stale stream-end
/// notification for a song that is no longer at the front is a no-op.
/// Returns whether a row was deleted.
pub async fn pop_head_for(pool: &SqlitePool, song_url: &str) -> Result<bool> {
    let result = sqlx::query(
        "DELETE FROM song_queue
         WHERE id = (SELECT MIN(id) FROM song_queue)
           AND song_id = (SELECT id FROM songs WHERE url = ?)",
    )
    .bind(song_url)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// All entries in play order
pub async fn list(pool: &SqlitePool) -> Result<Vec<QueueEntry>> {
    let rows = sqlx::query(&format!("{QUEUE_SELECT} ORDER BY q.id"))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let (song, user) = pair_from_row(row);
            QueueEntry {
                position,
                song,
                user,
            }
        })
        .collect())
}

/// Remove the entry at a zero-based position, returning it
pub async fn remove_position(pool: &SqlitePool, position: usize) -> Result<QueueEntry> {
    let position_i64 = i64::try_from(position)
        .map_err(|_| StorageError::InvalidRequest(format!("queue position {position}")))?;

    let row = sqlx::query(&format!(
        "{QUEUE_SELECT} ORDER BY q.id LIMIT 1 OFFSET ?"
    ))
    .bind(position_i64)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        StorageError::InvalidRequest(format!("queue position {position} is out of range"))
    })?;

    let queue_id: i64 = row.get("queue_id");
    let (song, user) = pair_from_row(&row);

    sqlx::query("DELETE FROM song_queue WHERE id = ?")
        .bind(queue_id)
        .execute(pool)
        .await?;

    Ok(QueueEntry {
        position,
        song,
        user,
    })
}

/// Drop every queue entry
pub async fn clear(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM song_queue").execute(pool).await?;
    Ok(())
}
