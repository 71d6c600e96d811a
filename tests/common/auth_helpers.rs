//! Authentication test helpers
//!
//! Provides utilities for building a test server and creating signed-in
//! test users.

use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use mesto::backend::auth::TOKEN_COOKIE;
use mesto::backend::routes::create_router;
use mesto::backend::server::{AppConfig, AppState};
use mesto::backend::store::Store;
use mesto::shared::UserResponse;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "test_password_123";

/// Config with the lowest bcrypt cost so tests stay fast
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Router over a fresh in-memory store
pub fn create_test_server() -> TestServer {
    create_test_server_with(test_config())
}

pub fn create_test_server_with(config: AppConfig) -> TestServer {
    let app = create_router(AppState::new(config, Store::memory()));
    TestServer::new(app).expect("Failed to create test server")
}

/// Signed-in test user
pub struct TestUser {
    pub user: UserResponse,
    pub email: String,
    pub password: String,
    pub cookie: Cookie<'static>,
}

/// Sign up and sign in a user with the given email
pub async fn create_test_user(server: &TestServer, email: &str) -> TestUser {
    let response = server
        .post("/signup")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/signin")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();

    TestUser {
        user: response.json(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        cookie: response.cookie(TOKEN_COOKIE),
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    create_test_user(server, &email).await
}
