//! Authentication API integration tests
//!
//! Register, login and `/api/auth/me`, including every 401 path.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use coin_arcade::backend::auth::SessionKeys;

use crate::common::{TestApp, TEST_SECRET};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "password123"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["coins"], 1000);
    assert_eq!(body["user"]["inventory"], json!([]));
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username_or_email() {
    let app = TestApp::new().await;
    app.register("alice").await;

    for (username, email) in [("alice", "other@example.com"), ("bob", "alice@example.com")] {
        let (status, body) = app
            .post(
                "/api/auth/register",
                None,
                json!({ "username": username, "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_body!(body, StatusCode::BAD_REQUEST);
    }

    // the rejected "bob" was never created
    let (status, _) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "bob", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = app.register("alice").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": user.username, "password": user.password }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], user.email);

    let token = body["access_token"].as_str().unwrap();
    assert_eq!(app.coins(token).await, 1000);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = TestApp::new().await;
    app.register("alice").await;

    for (username, password) in [("alice", "wrongpassword"), ("nobody", "password123")] {
        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid credentials");
        assert!(body.get("access_token").is_none());
    }
}

#[tokio::test]
async fn test_get_me_with_valid_token() {
    let app = TestApp::new().await;
    let user = app.register("alice").await;

    let (status, body) = app.get("/api/auth/me", Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["coins"], 1000);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_get_me_without_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/auth/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_body!(body, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_me_rejects_bad_tokens() {
    let app = TestApp::new().await;
    app.register("alice").await;

    let foreign = SessionKeys::new(b"someone-else", Duration::minutes(30))
        .issue("alice")
        .unwrap();
    let expired = SessionKeys::new(TEST_SECRET, Duration::minutes(30))
        .issue_at("alice", Utc::now() - Duration::hours(1))
        .unwrap();
    let ghost = SessionKeys::new(TEST_SECRET, Duration::minutes(30))
        .issue("ghost")
        .unwrap();

    for token in ["garbage", foreign.as_str(), expired.as_str(), ghost.as_str()] {
        let (status, _) = app.get("/api/auth/me", Some(token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "token {token} accepted");
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, StatusCode::NOT_FOUND);
}
