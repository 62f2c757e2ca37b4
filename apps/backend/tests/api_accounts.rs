//! Registration and login API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Registration answers with a usable session token.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_token() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let username = TestContext::unique_username("register");

    let response = server
        .post("/register")
        .json(&fixtures::credentials(&username, "hunter2"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    // The token authorizes card access straight away.
    let list = server
        .get("/flashcards")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(token),
        )
        .await;
    list.assert_status_ok();

    // Cleanup
    let user = ctx.db.get_user_by_username(&username).await.unwrap().unwrap();
    ctx.cleanup_user(user.id).await;
}

/// Registering the same username twice fails and stores exactly one row.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_username_fails() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let username = TestContext::unique_username("dup");

    let first = server
        .post("/register")
        .json(&fixtures::credentials(&username, "hunter2"))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/register")
        .json(&fixtures::credentials(&username, "other-password"))
        .await;
    second.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "duplicate_user");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(ctx.db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);

    // Cleanup
    let user = ctx.db.get_user_by_username(&username).await.unwrap().unwrap();
    ctx.cleanup_user(user.id).await;
}

/// Login with the credentials used at registration succeeds.
#[tokio::test]
#[ignore = "requires database"]
async fn test_login_after_register_succeeds() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let username = TestContext::unique_username("login");
    let (user_id, _) = ctx.create_test_user(&username, "hunter2").await;

    let response = server
        .post("/login")
        .json(&fixtures::credentials(&username, "hunter2"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());

    // Cleanup
    ctx.cleanup_user(user_id).await;
}

/// Wrong password fails with invalid_credentials.
#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_fails() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let username = TestContext::unique_username("badpw");
    let (user_id, _) = ctx.create_test_user(&username, "hunter2").await;

    let response = server
        .post("/login")
        .json(&fixtures::credentials(&username, "wrong"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_credentials");

    // Cleanup
    ctx.cleanup_user(user_id).await;
}

/// Unknown username is reported exactly like a wrong password, so the
/// endpoint cannot be used to probe which accounts exist.
#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_user_same_error_as_wrong_password() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/login")
        .json(&fixtures::credentials(
            &TestContext::unique_username("ghost"),
            "whatever",
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_credentials");
}

/// Blank username is a validation error.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_blank_username_rejected() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/register")
        .json(&fixtures::credentials("   ", "hunter2"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation_error");
}
