//! User API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use mesto::shared::{ObjectId, UserResponse};

use crate::common::*;

#[tokio::test]
async fn test_users_require_auth() {
    let server = create_test_server();

    for path in ["/users", "/users/me", "/users/0123456789abcdef01234567"] {
        let response = server.get(path).await;
        assert_error(&response, StatusCode::UNAUTHORIZED, "Authorization required");
    }

    let response = server
        .patch("/users/me")
        .json(&json!({ "name": "Marie", "about": "Physicist" }))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Authorization required");
}

#[tokio::test]
async fn test_list_users() {
    let server = create_test_server();
    let first = create_unique_test_user(&server).await;
    let second = create_unique_test_user(&server).await;

    let response = server.get("/users").add_cookie(first.cookie.clone()).await;

    response.assert_status_ok();
    let users: Vec<UserResponse> = response.json();
    assert_eq!(users.len(), 2);
    assert!(users.contains(&first.user));
    assert!(users.contains(&second.user));
}

#[tokio::test]
async fn test_get_me() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server.get("/users/me").add_cookie(user.cookie.clone()).await;

    response.assert_status_ok();
    let me: UserResponse = response.json();
    assert_eq!(me, user.user);
    assert_eq!(me.email, user.email);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let server = create_test_server();
    let caller = create_unique_test_user(&server).await;
    let other = create_unique_test_user(&server).await;

    let response = server
        .get(&format!("/users/{}", other.user.id))
        .add_cookie(caller.cookie.clone())
        .await;

    response.assert_status_ok();
    let found: UserResponse = response.json();
    assert_eq!(found, other.user);
}

#[tokio::test]
async fn test_get_user_malformed_id() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    for id in ["123", "zzzzzzzzzzzzzzzzzzzzzzzz", "0123456789abcdef012345678"] {
        let response = server
            .get(&format!("/users/{}", id))
            .add_cookie(user.cookie.clone())
            .await;
        assert_bad_request(&response);
    }
}

#[tokio::test]
async fn test_get_user_missing() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server
        .get(&format!("/users/{}", ObjectId::generate()))
        .add_cookie(user.cookie.clone())
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_update_profile() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server
        .patch("/users/me")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "name": "Marie", "about": "Physicist" }))
        .await;

    response.assert_status_ok();
    let updated: UserResponse = response.json();
    assert_eq!(updated.id, user.user.id);
    assert_eq!(updated.name, "Marie");
    assert_eq!(updated.about, "Physicist");
    assert_eq!(updated.avatar, user.user.avatar);

    let me: UserResponse = server
        .get("/users/me")
        .add_cookie(user.cookie.clone())
        .await
        .json();
    assert_eq!(me, updated);
}

#[tokio::test]
async fn test_update_profile_invalid() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let cases = [
        json!({ "name": "M", "about": "Physicist" }),
        json!({ "name": "Marie", "about": "P".repeat(31) }),
        json!({ "name": "Marie" }),
    ];

    for body in cases {
        let response = server
            .patch("/users/me")
            .add_cookie(user.cookie.clone())
            .json(&body)
            .await;
        assert_bad_request(&response);
    }
}

#[tokio::test]
async fn test_update_avatar() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server
        .patch("/users/me/avatar")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "avatar": "https://example.com/images/new-avatar.png" }))
        .await;

    response.assert_status_ok();
    let updated: UserResponse = response.json();
    assert_eq!(updated.avatar, "https://example.com/images/new-avatar.png");
    assert_eq!(updated.name, user.user.name);
}

#[tokio::test]
async fn test_update_avatar_invalid_link() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server
        .patch("/users/me/avatar")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "avatar": "definitely not a link" }))
        .await;

    assert_bad_request(&response);
}
