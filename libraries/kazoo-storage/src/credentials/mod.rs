//! Credential queries
//!
//! Password hashes for the HTTP facade, one row per user. Hashing and
//! verification live in the application; this slice only stores the
//! resulting bcrypt strings.

use crate::error::Result;
use sqlx::{Row, SqlitePool};

/// The stored password hash for a user, if one has been set
pub async fn get_password_hash(pool: &SqlitePool, user_id: i64) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Insert or replace the password hash for a user
pub async fn set_password_hash(pool: &SqlitePool, user_id: i64, hash: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, strftime('%s', 'now'))
         ON CONFLICT(user_id) DO UPDATE
             SET password_hash = excluded.password_hash,
                 updated_at = excluded.updated_at",
    )
    .bind(user_id)
    .bind(hash)
    .execute(pool)
    .await?;

    Ok(())
}
