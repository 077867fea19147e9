//! Test application and authentication helpers
//!
//! `TestApp` wraps the router built over a `MemoryStore` with a seeded
//! catalog. Requests go through `tower::ServiceExt::oneshot`, so no socket
//! is opened.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use coin_arcade::backend::auth::SessionKeys;
use coin_arcade::backend::routes::create_router;
use coin_arcade::backend::server::AppState;
use coin_arcade::backend::store::MemoryStore;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Fresh app with the seed catalog loaded
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionKeys::new(TEST_SECRET, Duration::minutes(30));
        let state = AppState::new(store, sessions, 4);
        state
            .catalog
            .ensure_seeded()
            .await
            .expect("Failed to seed catalog");

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Send a request and return status plus parsed JSON body
    ///
    /// An empty body parses as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    /// Register a user and return its credentials and token
    pub async fn register(&self, username: &str) -> TestUser {
        let email = format!("{username}@example.com");
        let password = "test_password_123".to_string();
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");

        TestUser {
            username: username.to_string(),
            email,
            password,
            token: body["access_token"]
                .as_str()
                .expect("access_token missing")
                .to_string(),
        }
    }

    /// Current balance as reported by `/api/auth/me`
    pub async fn coins(&self, token: &str) -> i64 {
        let (status, body) = self.get("/api/auth/me", Some(token)).await;
        assert_eq!(status, StatusCode::OK);
        body["coins"].as_i64().expect("coins missing")
    }

    /// Catalog id of the item named `name`
    pub async fn item_id(&self, name: &str) -> String {
        let (_, items) = self.get("/api/items", None).await;
        items
            .as_array()
            .expect("items is not an array")
            .iter()
            .find(|item| item["item_name"] == name)
            .and_then(|item| item["id"].as_str())
            .unwrap_or_else(|| panic!("no item named {name}"))
            .to_string()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
