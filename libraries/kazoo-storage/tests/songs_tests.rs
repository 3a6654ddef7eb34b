//! Integration tests for the songs vertical slice

mod test_helpers;

use std::path::Path;
use test_helpers::*;

#[tokio::test]
async fn test_get_or_create_returns_existing_row() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = kazoo_storage::songs::get_or_create(
        pool,
        "Original Title",
        "https://example.com/s",
        Some("https://example.com/thumb.jpg"),
    )
    .await
    .unwrap();

    // Re-resolving the same URL with a different title keeps the stored row
    let second =
        kazoo_storage::songs::get_or_create(pool, "Renamed Title", "https://example.com/s", None)
            .await
            .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.title, "Original Title");
    assert_eq!(
        second.thumbnail.as_deref(),
        Some("https://example.com/thumb.jpg")
    );
}

#[tokio::test]
async fn test_set_file_path_survives_re_resolution() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "Song", "https://example.com/s").await;
    kazoo_storage::songs::set_file_path(
        pool,
        "https://example.com/s",
        Path::new("/songs/youtube-abc-song.opus"),
    )
    .await
    .unwrap();

    let song = kazoo_storage::songs::get_or_create(pool, "Song", "https://example.com/s", None)
        .await
        .unwrap();
    assert_eq!(
        song.file_path.as_deref(),
        Some(Path::new("/songs/youtube-abc-song.opus"))
    );
}

#[tokio::test]
async fn test_upvote_increments_count() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "Song", "https://example.com/s").await;

    let song = kazoo_storage::songs::upvote(pool, "https://example.com/s")
        .await
        .unwrap();
    assert_eq!(song.upvotes, 1);

    let song = kazoo_storage::songs::upvote(pool, "https://example.com/s")
        .await
        .unwrap();
    assert_eq!(song.upvotes, 2);
}

#[tokio::test]
async fn test_upvote_unknown_url_fails() {
    let test_db = TestDb::new().await;

    let result = kazoo_storage::songs::upvote(test_db.pool(), "https://example.com/missing").await;

    assert!(matches!(
        result,
        Err(kazoo_storage::StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_set_file_path_unknown_url_fails() {
    let test_db = TestDb::new().await;

    let result = kazoo_storage::songs::set_file_path(
        test_db.pool(),
        "https://example.com/missing",
        Path::new("/songs/x.opus"),
    )
    .await;

    assert!(matches!(
        result,
        Err(kazoo_storage::StorageError::NotFound { .. })
    ));
}
