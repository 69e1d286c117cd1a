//! Bookshelf library catalog
//!
//! A small server-rendered catalog: list books page by page, search them, and
//! create, update or delete them through HTML forms.

use std::sync::Arc;

use axum::response::Html;
use serde::Serialize;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<dyn views::ViewRenderer>,
}

impl AppState {
    /// Render `view` with `context` into an HTML response body
    pub fn render<C: Serialize>(&self, view: &str, context: C) -> AppResult<Html<String>> {
        let context = serde_json::to_value(context)
            .map_err(|e| AppError::Internal(format!("Unserializable view context: {}", e)))?;
        Ok(Html(self.views.render(view, context)?))
    }
}
