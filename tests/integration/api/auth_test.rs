//! Authentication API integration tests
//!
//! Signup, signin, logout and session checks.

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;

use mesto::backend::auth::{TokenKeys, TOKEN_COOKIE};
use mesto::backend::store::models::{DEFAULT_ABOUT, DEFAULT_AVATAR, DEFAULT_NAME};
use mesto::shared::{ObjectId, UserResponse};

use crate::common::*;

#[tokio::test]
async fn test_signup_success_fills_defaults() {
    let server = create_test_server();

    let response = server
        .post("/signup")
        .json(&json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let user: UserResponse = response.json();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.name, DEFAULT_NAME);
    assert_eq!(user.about, DEFAULT_ABOUT);
    assert_eq!(user.avatar, DEFAULT_AVATAR);
}

#[tokio::test]
async fn test_signup_with_profile() {
    let server = create_test_server();

    let response = server
        .post("/signup")
        .json(&json!({
            "name": "Marie",
            "about": "Physicist",
            "avatar": "https://example.com/marie.jpg",
            "email": "marie@example.com",
            "password": "radium"
        }))
        .await;

    response.assert_status_ok();
    let user: UserResponse = response.json();
    assert_eq!(user.name, "Marie");
    assert_eq!(user.about, "Physicist");
    assert_eq!(user.avatar, "https://example.com/marie.jpg");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = create_test_server();
    create_test_user(&server, "test@example.com").await;

    // Same address in a different case is still a duplicate
    let response = server
        .post("/signup")
        .json(&json!({
            "email": "Test@Example.com",
            "password": "password123"
        }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "This email is already registered");
}

#[tokio::test]
async fn test_signup_invalid_body() {
    let server = create_test_server();

    let cases = [
        json!({ "email": "not-an-email", "password": "password123" }),
        json!({ "email": "test@example.com" }),
        json!({ "email": "test@example.com", "password": "" }),
        json!({ "email": "test@example.com", "password": "pw", "name": "X" }),
        json!({ "email": "test@example.com", "password": "pw", "avatar": "not a url" }),
        json!({ "email": "test@example.com", "password": "pw", "role": "admin" }),
    ];

    for body in cases {
        let response = server.post("/signup").json(&body).await;
        assert_bad_request(&response);
    }
}

#[tokio::test]
async fn test_signin_sets_cookie() {
    let server = create_test_server();
    let signup: UserResponse = server
        .post("/signup")
        .json(&json!({ "email": "test@example.com", "password": "password123" }))
        .await
        .json();

    let response = server
        .post("/signin")
        .json(&json!({ "email": "test@example.com", "password": "password123" }))
        .await;

    response.assert_status_ok();
    let user: UserResponse = response.json();
    assert_eq!(user, signup);

    let cookie = response.cookie(TOKEN_COOKIE);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));

    let set_cookie = response.headers()["set-cookie"].to_str().unwrap().to_string();
    assert!(set_cookie.contains("SameSite=Strict"));
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let server = create_test_server();
    create_test_user(&server, "test@example.com").await;

    let response = server
        .post("/signin")
        .json(&json!({ "email": "test@example.com", "password": "wrongpassword" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Incorrect email or password");
    assert!(response.maybe_cookie(TOKEN_COOKIE).is_none());
}

#[tokio::test]
async fn test_signin_unknown_email() {
    let server = create_test_server();

    let response = server
        .post("/signin")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Incorrect email or password");
}

#[tokio::test]
async fn test_signin_normalizes_email() {
    let server = create_test_server();
    create_test_user(&server, "test@example.com").await;

    let response = server
        .post("/signin")
        .json(&json!({ "email": "  TEST@example.com ", "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_checktoken_with_valid_cookie() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server.get("/checktoken").add_cookie(user.cookie.clone()).await;

    response.assert_status_ok();
    let current: UserResponse = response.json();
    assert_eq!(current, user.user);
}

#[tokio::test]
async fn test_checktoken_without_cookie_is_false() {
    let server = create_test_server();

    let response = server.get("/checktoken").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn test_checktoken_with_garbage_is_false() {
    let server = create_test_server();

    let response = server
        .get("/checktoken")
        .add_cookie(Cookie::new(TOKEN_COOKIE, "garbage"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn test_checktoken_for_unknown_user_is_false() {
    let server = create_test_server();
    let keys = TokenKeys::new(TEST_SECRET.as_bytes(), Duration::from_secs(60));
    let token = keys.issue(&ObjectId::generate()).unwrap();

    let response = server
        .get("/checktoken")
        .add_cookie(Cookie::new(TOKEN_COOKIE, token))
        .await;

    let body: Value = response.json();
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server.get("/logout").add_cookie(user.cookie.clone()).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Signed out" }));

    let set_cookie = response.headers()["set-cookie"].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("jwt=;"), "unexpected cookie: {}", set_cookie);
    assert!(set_cookie.contains("Max-Age=0"));
}
