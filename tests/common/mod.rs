//! Shared helpers for router tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use tower::ServiceExt;

use bookshelf::{
    api,
    config::{AppConfig, NotFoundPolicy},
    models::BookInput,
    repository::{BookStore, MemoryBooksRepository},
    services::Services,
    views::TemplateViews,
    AppState,
};

/// Build a test config on top of the defaults
pub fn test_config(policy: NotFoundPolicy) -> AppConfig {
    let mut config = AppConfig::default();
    config.catalog.not_found_policy = policy;
    config
}

/// Build the full application router over the given store
pub fn build_app_with_store(store: Arc<dyn BookStore>, config: AppConfig) -> Router {
    let services = Services::new(store, &config.catalog);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        views: Arc::new(TemplateViews::new().expect("templates compile")),
    };
    api::create_router(state)
}

/// Router plus a handle on its in-memory store for seeding and inspection
pub fn build_test_app(policy: NotFoundPolicy) -> (Router, Arc<MemoryBooksRepository>) {
    let store = Arc::new(MemoryBooksRepository::new());
    let app = build_app_with_store(store.clone(), test_config(policy));
    (app, store)
}

pub fn book(title: &str, author: &str, genre: &str, year: &str) -> BookInput {
    BookInput {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        year: year.to_string(),
    }
}

/// Insert `count` numbered books ("Book 1", "Book 2", ...)
pub async fn seed_books(store: &MemoryBooksRepository, count: usize) {
    for i in 1..=count {
        store
            .create(&book(&format!("Book {}", i), "Anonymous", "", ""))
            .await
            .expect("seed book");
    }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST an already url-encoded form body
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
