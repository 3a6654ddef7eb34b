//! Integration tests for the queue vertical slice
//!
//! Covers insertion order, head removal semantics, positional removal,
//! and idempotent pops against stale song URLs.

mod test_helpers;

use test_helpers::*;

#[tokio::test]
async fn test_queue_preserves_insertion_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song_a = create_test_song(pool, "Song A", "https://example.com/a").await;
    let song_b = create_test_song(pool, "Song B", "https://example.com/b").await;
    let song_c = create_test_song(pool, "Song C", "https://example.com/c").await;

    for song in [&song_a, &song_b, &song_c] {
        kazoo_storage::queue::enqueue(pool, song.id, user.id)
            .await
            .unwrap();
    }

    let entries = kazoo_storage::queue::list(pool).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].position, 0);
    assert_eq!(entries[0].song.url, song_a.url);
    assert_eq!(entries[1].song.url, song_b.url);
    assert_eq!(entries[2].song.url, song_c.url);
    assert_eq!(entries[2].user.name, "alice");
}

#[tokio::test]
async fn test_peek_head_does_not_remove() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song = create_test_song(pool, "Song", "https://example.com/s").await;
    kazoo_storage::queue::enqueue(pool, song.id, user.id)
        .await
        .unwrap();

    let head = kazoo_storage::queue::peek_head(pool).await.unwrap();
    let (head_song, head_user) = head.expect("head should exist");
    assert_eq!(head_song.url, song.url);
    assert_eq!(head_user.id, user.id);

    // Still there after peeking
    assert_eq!(kazoo_storage::queue::list(pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_peek_head_empty_queue() {
    let test_db = TestDb::new().await;

    let head = kazoo_storage::queue::peek_head(test_db.pool()).await.unwrap();
    assert!(head.is_none());
}

#[tokio::test]
async fn test_pop_head_for_matching_url() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song_a = create_test_song(pool, "Song A", "https://example.com/a").await;
    let song_b = create_test_song(pool, "Song B", "https://example.com/b").await;
    kazoo_storage::queue::enqueue(pool, song_a.id, user.id)
        .await
        .unwrap();
    kazoo_storage::queue::enqueue(pool, song_b.id, user.id)
        .await
        .unwrap();

    let removed = kazoo_storage::queue::pop_head_for(pool, &song_a.url)
        .await
        .unwrap();
    assert!(removed);

    let entries = kazoo_storage::queue::list(pool).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].song.url, song_b.url);
}

#[tokio::test]
async fn test_pop_head_for_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song_a = create_test_song(pool, "Song A", "https://example.com/a").await;
    let song_b = create_test_song(pool, "Song B", "https://example.com/b").await;
    kazoo_storage::queue::enqueue(pool, song_a.id, user.id)
        .await
        .unwrap();
    kazoo_storage::queue::enqueue(pool, song_b.id, user.id)
        .await
        .unwrap();

    assert!(kazoo_storage::queue::pop_head_for(pool, &song_a.url)
        .await
        .unwrap());

    // Second pop with the stale URL must not touch the new head
    assert!(!kazoo_storage::queue::pop_head_for(pool, &song_a.url)
        .await
        .unwrap());

    let entries = kazoo_storage::queue::list(pool).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].song.url, song_b.url);
}

#[tokio::test]
async fn test_pop_head_for_ignores_non_head_url() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song_a = create_test_song(pool, "Song A", "https://example.com/a").await;
    let song_b = create_test_song(pool, "Song B", "https://example.com/b").await;
    kazoo_storage::queue::enqueue(pool, song_a.id, user.id)
        .await
        .unwrap();
    kazoo_storage::queue::enqueue(pool, song_b.id, user.id)
        .await
        .unwrap();

    // song_b sits behind the head; popping for it changes nothing
    assert!(!kazoo_storage::queue::pop_head_for(pool, &song_b.url)
        .await
        .unwrap());
    assert_eq!(kazoo_storage::queue::list(pool).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_remove_position_returns_entry() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song_a = create_test_song(pool, "Song A", "https://example.com/a").await;
    let song_b = create_test_song(pool, "Song B", "https://example.com/b").await;
    let song_c = create_test_song(pool, "Song C", "https://example.com/c").await;
    for song in [&song_a, &song_b, &song_c] {
        kazoo_storage::queue::enqueue(pool, song.id, user.id)
            .await
            .unwrap();
    }

    let removed = kazoo_storage::queue::remove_position(pool, 1).await.unwrap();
    assert_eq!(removed.song.url, song_b.url);

    let entries = kazoo_storage::queue::list(pool).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].song.url, song_a.url);
    assert_eq!(entries[1].song.url, song_c.url);
    assert_eq!(entries[1].position, 1);
}

#[tokio::test]
async fn test_remove_position_out_of_range() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song = create_test_song(pool, "Song", "https://example.com/s").await;
    kazoo_storage::queue::enqueue(pool, song.id, user.id)
        .await
        .unwrap();

    let result = kazoo_storage::queue::remove_position(pool, 5).await;
    assert!(matches!(
        result,
        Err(kazoo_storage::StorageError::InvalidRequest(_))
    ));

    // Queue untouched
    assert_eq!(kazoo_storage::queue::list(pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_queue() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    for i in 0..4 {
        let song = create_test_song(
            pool,
            &format!("Song {i}"),
            &format!("https://example.com/{i}"),
        )
        .await;
        kazoo_storage::queue::enqueue(pool, song.id, user.id)
            .await
            .unwrap();
    }

    kazoo_storage::queue::clear(pool).await.unwrap();
    assert!(kazoo_storage::queue::list(pool).await.unwrap().is_empty());
    assert!(kazoo_storage::queue::peek_head(pool).await.unwrap().is_none());
}

#[tokio::test]
async fn test_same_song_can_be_queued_twice() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let song = create_test_song(pool, "Song", "https://example.com/s").await;
    kazoo_storage::queue::enqueue(pool, song.id, user.id)
        .await
        .unwrap();
    kazoo_storage::queue::enqueue(pool, song.id, user.id)
        .await
        .unwrap();

    let entries = kazoo_storage::queue::list(pool).await.unwrap();
    assert_eq!(entries.len(), 2);

    // First pop removes only the first copy
    assert!(kazoo_storage::queue::pop_head_for(pool, &song.url)
        .await
        .unwrap());
    assert_eq!(kazoo_storage::queue::list(pool).await.unwrap().len(), 1);
}
