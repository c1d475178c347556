#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use carteira_backend::app::{build_app_with_pool, DbPool};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use serde_json::Value;
use tower::util::ServiceExt;

const SCHEMA_SQL: &str =
    include_str!("../../migrations/2024-06-01-000000_create_clientes_ativos/up.sql");

/// Router backed by a pool that never connects. Only usable for requests
/// that are rejected before a connection is requested.
pub fn app_without_db() -> Router {
    let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@127.0.0.1:1/unused");
    let pool: DbPool = Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(100))
        .build_unchecked(manager);
    build_app_with_pool(pool, &[])
}

/// Router backed by the database in `DATABASE_URL`, with the schema applied.
pub fn app_with_db() -> Router {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool: DbPool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    pool.get()
        .expect("Failed to get test connection")
        .batch_execute(SCHEMA_SQL)
        .expect("Failed to apply schema");
    build_app_with_pool(pool, &[])
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Email unique per call so parallel tests don't observe each other's rows.
pub fn unique_email(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}.{nanos}.{n}@example.com")
}
