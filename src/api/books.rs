//! Book catalog pages

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};

use super::parse_book_id;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookInput, FieldError, PageQuery},
    services::catalog::Submission,
    views, AppState,
};

const BOOKS_PATH: &str = "/books";

/// Search form body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search: String,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    title: &'static str,
    books: &'a [Book],
    /// Number of page links; absent on search results
    buttons: Option<i64>,
    page: Option<i64>,
    search: Option<&'a str>,
}

#[derive(Serialize)]
struct FormContext<'a> {
    title: &'static str,
    book: &'a BookDraft,
    errors: &'a [FieldError],
}

/// Home page
pub async fn index() -> Redirect {
    Redirect::to(BOOKS_PATH)
}

/// Paginated book list
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let requested = query.requested_page().ok_or_else(|| {
        AppError::NotFound(format!(
            "Invalid page number {:?}",
            query.page_num.as_deref().unwrap_or_default()
        ))
    })?;

    let listing = state.services.catalog.list_page(requested).await?;

    state.render(
        views::INDEX,
        IndexContext {
            title: "Books",
            books: &listing.books,
            buttons: Some(listing.page.page_count),
            page: Some(listing.page.number),
            search: None,
        },
    )
}

/// Books matching the search form
pub async fn search_books(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let books = state.services.catalog.search(&form.search).await?;

    state.render(
        views::INDEX,
        IndexContext {
            title: "Books",
            books: &books,
            buttons: None,
            page: None,
            search: Some(form.search.as_str()),
        },
    )
}

/// Empty creation form
pub async fn new_book_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, views::NEW_BOOK, &BookDraft::new(BookInput::default()), &[])
}

/// Create a book from the submitted form
pub async fn create_book(
    State(state): State<AppState>,
    Form(input): Form<BookInput>,
) -> AppResult<Response> {
    match state.services.catalog.submit_book(input, None).await? {
        Submission::Saved(_) => Ok(Redirect::to(BOOKS_PATH).into_response()),
        Submission::Invalid { errors, draft } => {
            Ok(render_form(&state, views::NEW_BOOK, &draft, &errors)?.into_response())
        }
    }
}

/// Edit form for one book
pub async fn edit_book_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_book_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    render_form(&state, views::UPDATE_BOOK, &BookDraft::from(&book), &[])
}

/// Update a book from the submitted form
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<BookInput>,
) -> AppResult<Response> {
    let id = parse_book_id(&id)?;
    match state.services.catalog.submit_book(input, Some(id)).await? {
        Submission::Saved(_) => Ok(Redirect::to(BOOKS_PATH).into_response()),
        Submission::Invalid { errors, draft } => {
            Ok(render_form(&state, views::UPDATE_BOOK, &draft, &errors)?.into_response())
        }
    }
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_book_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to(BOOKS_PATH))
}

fn render_form(
    state: &AppState,
    view: &'static str,
    book: &BookDraft,
    errors: &[FieldError],
) -> AppResult<Html<String>> {
    let title = if view == views::UPDATE_BOOK {
        "Update Book"
    } else {
        "New Book"
    };
    state.render(view, FormContext { title, book, errors })
}
