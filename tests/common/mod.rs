use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use async_trait::async_trait;
use bank_api::{
    database::{AccountStore, MemoryDatabase},
    models::{Account, AccountUpdate, StoreError},
    routes::build_router,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Full router over a fresh in-memory store
pub fn test_app() -> Router {
    app_with_store(MemoryDatabase::new())
}

pub fn app_with_store(store: impl AccountStore + 'static) -> Router {
    build_router(Arc::new(AppState::new(store)))
}

/// Store whose every call fails the way an unreachable database does
pub struct UnavailableDatabase;

#[async_trait]
impl AccountStore for UnavailableDatabase {
    async fn create_account(&self, _: &Account) -> Result<Account, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
    async fn get_accounts(&self) -> Result<Vec<Account>, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
    async fn get_account_by_id(&self, _: i32) -> Result<Account, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
    async fn delete_account(&self, _: i32) -> Result<(), StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
    async fn update_account(&self, _: i32, _: &AccountUpdate) -> Result<Account, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|b| b.to_string()).unwrap_or_default();
    send_raw(app, method, uri, &body).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    send_with_content_type(app, method, uri, Some("application/json"), body).await
}

/// `content_type: None` sends no `Content-Type` header at all
pub async fn send_with_content_type(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_owned())).expect("request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Create an account through the API and return its id
pub async fn create_account(app: &Router, first_name: &str, last_name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/account",
        Some(serde_json::json!({"firstName": first_name, "lastName": last_name})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["id"].as_i64().expect("id")
}
