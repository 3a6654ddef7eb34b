//! Kazoo Storage
//!
//! `SQLite` persistence layer for the Kazoo music bot.
//!
//! The store is the single source of truth for songs, users, the ordered
//! play queue, per-user playlists, and the singleton bot-status row. Each
//! feature owns its own queries (vertical slicing); `SqliteSongStore` ties
//! the slices together behind the `kazoo_core::SongStore` trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use kazoo_storage::{create_pool, run_migrations, SqliteSongStore};
//! use kazoo_core::SongStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://kazoo.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteSongStore::new(pool);
//! store.reset_status().await?;
//!
//! let entries = store.list_queue().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod credentials;
pub mod playlists;
pub mod queue;
pub mod songs;
pub mod status;
pub mod users;

pub use context::SqliteSongStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://kazoo.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
