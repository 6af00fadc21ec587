//! Shared fixtures for integration tests.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied. The pool is pinned to one connection because each SQLite
//! memory connection is a separate database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use invoai_api::api::{create_router, AppInfo, AppState};
use invoai_api::infra::{Database, Migrator};
use invoai_api::services::{ServiceContainer, Services};

pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub fn services(db: &DatabaseConnection) -> Arc<dyn ServiceContainer> {
    Arc::new(Services::from_connection(db.clone()))
}

pub fn app(db: &DatabaseConnection) -> Router {
    let state = AppState::new(
        services(db),
        Arc::new(Database::from_connection(db.clone())),
        AppInfo {
            name: "InvoAI User Management".to_string(),
            version: "1.0.0".to_string(),
        },
    );
    create_router(state)
}

/// Send one request through the router and decode the envelope.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response: Response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
