//! End-to-end flows on Postgres
//!
//! The app is built by `create_app` with `DATABASE_URL`, so requests go
//! through the same store the server uses in production.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use mesto::backend::store::models::DEFAULT_NAME;
use mesto::shared::{CardResponse, ObjectId, UserResponse};

use crate::common::database::create_db_test_server;
use crate::common::*;

fn unique_email() -> String {
    format!("flow_{}@example.com", Uuid::new_v4().simple())
}

#[tokio::test]
async fn test_signup_then_signin() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let email = unique_email();

    let user = create_test_user(&server, &email).await;
    assert_eq!(user.user.email, email);

    let response = server.get("/users/me").add_cookie(user.cookie.clone()).await;
    response.assert_status_ok();
    let me: UserResponse = response.json();
    assert_eq!(me.id, user.user.id);
    assert_eq!(me.name, DEFAULT_NAME);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let email = unique_email();
    create_test_user(&server, &email).await;

    let response = server
        .post("/signup")
        .json(&json!({ "email": email.to_uppercase(), "password": TEST_PASSWORD }))
        .await;
    assert_error(&response, StatusCode::CONFLICT, "This email is already registered");
}

#[tokio::test]
async fn test_double_like_is_idempotent() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let owner = create_unique_test_user(&server).await;
    let fan = create_unique_test_user(&server).await;

    let response = server
        .post("/cards")
        .add_cookie(owner.cookie.clone())
        .json(&json!({ "name": "Baikal", "link": "https://example.com/baikal.jpg" }))
        .await;
    response.assert_status_ok();
    let card: CardResponse = response.json();

    let path = format!("/cards/{}/likes", card.id);
    let first: CardResponse = server.put(&path).add_cookie(fan.cookie.clone()).await.json();
    let second: CardResponse = server.put(&path).add_cookie(fan.cookie.clone()).await.json();

    assert_eq!(first.likes, vec![fan.user.id.clone()]);
    assert_eq!(second.likes, first.likes);

    let unliked: CardResponse = server.delete(&path).add_cookie(fan.cookie.clone()).await.json();
    assert!(unliked.likes.is_empty());
}

#[tokio::test]
async fn test_foreign_delete_keeps_card() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let owner = create_unique_test_user(&server).await;
    let stranger = create_unique_test_user(&server).await;

    let response = server
        .post("/cards")
        .add_cookie(owner.cookie.clone())
        .json(&json!({ "name": "Elbrus", "link": "https://example.com/elbrus.jpg" }))
        .await;
    let card: CardResponse = response.json();
    let path = format!("/cards/{}", card.id);

    let response = server.delete(&path).add_cookie(stranger.cookie.clone()).await;
    assert_error(
        &response,
        StatusCode::FORBIDDEN,
        "You cannot delete another user's card",
    );

    let listed: Vec<CardResponse> = server.get("/cards").add_cookie(owner.cookie.clone()).await.json();
    assert!(listed.iter().any(|c| c.id == card.id));

    server
        .delete(&path)
        .add_cookie(owner.cookie.clone())
        .await
        .assert_status_ok();

    let response = server.delete(&path).add_cookie(owner.cookie.clone()).await;
    assert_error(&response, StatusCode::NOT_FOUND, "Card not found");
}

#[tokio::test]
async fn test_users_list_in_signup_order() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let first = create_unique_test_user(&server).await;
    let second = create_unique_test_user(&server).await;

    let users: Vec<Value> = server.get("/users").add_cookie(first.cookie.clone()).await.json();
    let ids: Vec<&str> = users
        .iter()
        .filter_map(|u| u["_id"].as_str())
        .filter(|id| *id == first.user.id.as_str() || *id == second.user.id.as_str())
        .collect();

    assert_eq!(ids, vec![first.user.id.as_str(), second.user.id.as_str()]);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let Some(server) = create_db_test_server().await else {
        return;
    };
    let user = create_unique_test_user(&server).await;

    let response = server
        .get(&format!("/users/{}", ObjectId::generate()))
        .add_cookie(user.cookie.clone())
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");
}
