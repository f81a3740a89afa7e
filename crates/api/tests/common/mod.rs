#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ecopoints_api::config::{default_item_assets_dir, ServerConfig};
use ecopoints_api::router::build_app_router;
use ecopoints_api::state::AppState;

/// Public base URL used by test configs.
pub const TEST_UPLOADS_BASE_URL: &str = "http://localhost:3333/uploads";

const BOUNDARY: &str = "----ecopoints-test-boundary";

/// Directory test uploads are written to.
pub fn test_uploads_dir() -> PathBuf {
    std::env::temp_dir().join("ecopoints-api-tests")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        uploads_dir: test_uploads_dir(),
        uploads_base_url: TEST_UPLOADS_BASE_URL.to_string(),
        item_assets_dir: default_item_assets_dir(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// A file part for [`post_multipart`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub data: Vec<u8>,
}

impl<'a> FilePart<'a> {
    /// A small PNG-typed `image` part.
    pub fn png(file_name: &'a str) -> Self {
        Self {
            field: "image",
            file_name,
            content_type: "image/png",
            data: b"\x89PNG\r\n\x1a\nnot-really-pixels".to_vec(),
        }
    }
}

/// Encode text fields and an optional file as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<&FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some(file) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(&file.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<&FilePart<'_>>,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, file)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Standard registration form fields, with the item list supplied by the caller.
pub fn point_fields<'a>(
    name: &'a str,
    uf: &'a str,
    city: &'a str,
    items: &'a str,
) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("email", "contato@example.com"),
        ("whatsapp", "5581999990000"),
        ("latitude", "-8.0476"),
        ("longitude", "-34.877"),
        ("city", city),
        ("uf", uf),
        ("items", items),
    ]
}

/// Register a point through the API and return its id.
pub async fn create_point(pool: &PgPool, name: &str, uf: &str, city: &str, items: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/points",
        &point_fields(name, uf, city, items),
        Some(&FilePart::png("front.png")),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Number of stored photos in the test uploads dir generated from `original`.
pub fn stored_copies(original: &str) -> usize {
    let suffix = format!("-{original}");
    std::fs::read_dir(test_uploads_dir())
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|e| e.file_name().to_string_lossy().ends_with(&suffix))
                .count()
        })
        .unwrap_or(0)
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
