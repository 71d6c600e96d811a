//! Database test fixtures
//!
//! Postgres tests run only when `DATABASE_URL` is set; without it every
//! helper returns `None` and the test returns early. Tests share one
//! database, so each one works with its own uniquely named users instead
//! of truncating tables.

use axum_test::TestServer;
use sqlx::PgPool;

use mesto::backend::server::{create_app, AppConfig};
use mesto::backend::store::Store;

use super::auth_helpers::TEST_SECRET;

/// Test database URL, if one is configured
pub fn database_url() -> Option<String> {
    dotenv::dotenv().ok();
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("DATABASE_URL not set, skipping Postgres test");
            None
        }
    }
}

/// Connect a pool and bring the schema up to date
pub async fn create_test_pool() -> Option<PgPool> {
    let url = database_url()?;
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    Some(pool)
}

/// Run the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Postgres-backed store with a migrated schema
pub async fn create_test_store() -> Option<Store> {
    create_test_pool().await.map(Store::Postgres)
}

/// Full app built by `create_app` against the test database
pub async fn create_db_test_server() -> Option<TestServer> {
    let url = database_url()?;
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .database_url(url)
        .build()
        .expect("test config is valid");

    let app = create_app(config)
        .await
        .expect("Failed to build app against the test database");
    Some(TestServer::new(app).expect("Failed to create test server"))
}
