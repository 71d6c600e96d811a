//! Database migration tests
//!
//! Tests to ensure migrations run and the schema has the expected tables

use crate::common::database::{create_test_pool, run_migrations};

#[tokio::test]
async fn test_migrations_run_successfully() {
    let Some(pool) = create_test_pool().await else {
        return;
    };

    // Already applied by the fixture; a second run must be a no-op
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should rerun cleanly: {:?}", result.err());
}

#[tokio::test]
async fn test_tables_exist() {
    let Some(pool) = create_test_pool().await else {
        return;
    };

    for table in ["users", "cards", "card_likes"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {table} LIMIT 1"))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{table} table should exist");
    }
}

#[tokio::test]
async fn test_users_have_created_at() {
    let Some(pool) = create_test_pool().await else {
        return;
    };

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM information_schema.columns \
         WHERE table_name = 'users' AND column_name = 'created_at'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 1);
}
