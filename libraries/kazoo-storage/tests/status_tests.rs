//! Integration tests for the bot status singleton row

mod test_helpers;

use kazoo_core::types::BotStatus;
use test_helpers::TestDb;

#[tokio::test]
async fn test_status_defaults_to_stopped() {
    let test_db = TestDb::new().await;

    let status = kazoo_storage::status::get(test_db.pool()).await.unwrap();
    assert_eq!(status, BotStatus::Stopped);
}

#[tokio::test]
async fn test_set_and_get_status() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    kazoo_storage::status::set(pool, BotStatus::Playing)
        .await
        .unwrap();
    assert_eq!(
        kazoo_storage::status::get(pool).await.unwrap(),
        BotStatus::Playing
    );

    kazoo_storage::status::set(pool, BotStatus::Paused)
        .await
        .unwrap();
    assert_eq!(
        kazoo_storage::status::get(pool).await.unwrap(),
        BotStatus::Paused
    );
}

#[tokio::test]
async fn test_singleton_row_is_replaced_not_duplicated() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    kazoo_storage::status::set(pool, BotStatus::Playing)
        .await
        .unwrap();
    kazoo_storage::status::set(pool, BotStatus::Paused)
        .await
        .unwrap();

    let row = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bot_status")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(row, 1);
}

#[tokio::test]
async fn test_reset_returns_to_stopped() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    kazoo_storage::status::set(pool, BotStatus::Playing)
        .await
        .unwrap();
    kazoo_storage::status::reset(pool).await.unwrap();

    assert_eq!(
        kazoo_storage::status::get(pool).await.unwrap(),
        BotStatus::Stopped
    );
}
