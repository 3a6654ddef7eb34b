//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

use kazoo_core::types::{Song, User};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = kazoo_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        kazoo_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> User {
    kazoo_storage::users::get_or_create(pool, name)
        .await
        .expect("Failed to create test user")
}

/// Test fixture: Create a test song
pub async fn create_test_song(pool: &SqlitePool, title: &str, url: &str) -> Song {
    kazoo_storage::songs::get_or_create(pool, title, url, None)
        .await
        .expect("Failed to create test song")
}
