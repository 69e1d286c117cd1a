//! HTTP routes for Bookshelf

pub mod books;
pub mod health;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::NotFoundPolicy,
    error::{AppError, ErrorKind, ErrorPage},
    views, AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(books::index))
        .route("/books", get(books::list_books).post(books::search_books))
        .route("/books/new", get(books::new_book_form).post(books::create_book))
        .route("/books/:id", get(books::edit_book_form).post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), render_error_pages))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unknown routes
async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

/// Replace the body of error responses with the matching HTML view.
///
/// Handlers only return [`AppError`]; this is the one place where the
/// not-found policy is applied.
pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let Some(page) = response.extensions_mut().remove::<ErrorPage>() else {
        return response;
    };

    let (view, context) = match (page.kind, state.config.catalog.not_found_policy) {
        (ErrorKind::NotFound, NotFoundPolicy::Render) => (
            views::PAGE_NOT_FOUND,
            json!({ "title": "Page Not Found" }),
        ),
        (ErrorKind::NotFound, NotFoundPolicy::Escalate) => (
            views::ERROR,
            json!({
                "title": "Page Not Found",
                "status": page.status.as_u16(),
                "message": "Sorry! We couldn't find the page you were looking for.",
            }),
        ),
        (ErrorKind::Failure, _) => (
            views::ERROR,
            json!({
                "title": "Server Error",
                "status": page.status.as_u16(),
                "message": "Sorry! There was an unexpected error on the server.",
            }),
        ),
    };

    match state.views.render(view, context) {
        Ok(html) => (page.status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (page.status, page.message).into_response()
        }
    }
}

/// Parse a book id from the path; anything that is not an id is not found
pub(crate) fn parse_book_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
}
