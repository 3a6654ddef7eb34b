//! Bot status queries
//!
//! A single row (id = 1) records the playback state and the pid of the
//! process that last wrote it. The row is reset to `Stopped` on startup
//! so a crash never leaves a stale `Playing` behind.

use crate::error::{Result, StorageError};
use kazoo_core::types::BotStatus;
use sqlx::{Row, SqlitePool};

/// Current persisted status, `Stopped` if the row has never been written
pub async fn get(pool: &SqlitePool) -> Result<BotStatus> {
    let row = sqlx::query("SELECT status FROM bot_status WHERE id = 1")
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let raw: String = row.get("status");
            BotStatus::parse(&raw).map_err(|err| StorageError::InvalidRequest(err.to_string()))
        }
        None => Ok(BotStatus::Stopped),
    }
}

/// Persist the status together with this process's pid
pub async fn set(pool: &SqlitePool, status: BotStatus) -> Result<()> {
    sqlx::query(
        "INSERT INTO bot_status (id, status, pid) VALUES (1, ?, ?)
         ON CONFLICT(id) DO UPDATE SET status = excluded.status, pid = excluded.pid",
    )
    .bind(status.as_str())
    .bind(i64::from(std::process::id()))
    .execute(pool)
    .await?;

    Ok(())
}

/// Force the row back to `Stopped`
pub async fn reset(pool: &SqlitePool) -> Result<()> {
    set(pool, BotStatus::Stopped).await
}
