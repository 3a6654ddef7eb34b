//! User queries
//!
//! Users are created lazily the first time a name is referenced.

use crate::error::{Result, StorageError};
use kazoo_core::types::User;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

/// Look up a user by name
pub async fn get_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(user_from_row))
}

/// Fetch the user with this name, inserting it first if unknown
pub async fn get_or_create(pool: &SqlitePool, name: &str) -> Result<User> {
    sqlx::query("INSERT INTO users (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(pool)
        .await?;

    get_by_name(pool, name)
        .await?
        .ok_or_else(|| StorageError::not_found("User", name))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM users ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(user_from_row).collect())
}
