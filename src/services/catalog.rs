//! Catalog service: listing, search and the book form flows

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        pagination::{self, Page},
        Book, BookDraft, BookInput, FieldError, SearchFilter,
    },
    repository::BookStore,
};

/// One page of the book list
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub page: Page,
}

/// Outcome of a create or update form submission
#[derive(Debug, Clone)]
pub enum Submission {
    Saved(Book),
    /// The store rejected the input; nothing was written
    Invalid {
        errors: Vec<FieldError>,
        draft: BookDraft,
    },
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
    page_size: i64,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>, page_size: i64) -> Self {
        Self { store, page_size }
    }

    /// Load page `requested_page` of the book list
    pub async fn list_page(&self, requested_page: i64) -> AppResult<BookPage> {
        let total = self.store.count().await?;
        let page = pagination::paginate(total, self.page_size, requested_page).ok_or_else(|| {
            AppError::NotFound(format!(
                "Page {} not found ({} books, {} per page)",
                requested_page, total, self.page_size
            ))
        })?;

        tracing::debug!(
            page = page.number,
            offset = page.offset,
            page_count = page.page_count,
            "Listing books"
        );

        let books = self.store.find_page(page.limit, page.offset).await?;
        Ok(BookPage { books, page })
    }

    /// All books whose title, author, genre or year contains `term`
    pub async fn search(&self, term: &str) -> AppResult<Vec<Book>> {
        tracing::debug!(term, "Searching books");
        let books = self.store.search(&SearchFilter::new(term)).await?;
        Ok(books)
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| book_not_found(id))
    }

    /// Create a book, or update book `existing_id` when given.
    ///
    /// Rejected input comes back as [`Submission::Invalid`] with the submitted
    /// values untouched; other storage failures are errors.
    pub async fn submit_book(
        &self,
        input: BookInput,
        existing_id: Option<i32>,
    ) -> AppResult<Submission> {
        let result = match existing_id {
            None => self.store.create(&input).await.map_err(AppError::from),
            Some(id) => {
                let existing = self.get_book(id).await?;
                self.store
                    .update(existing.id, &input)
                    .await
                    .map_err(AppError::from)
                    .and_then(|updated| updated.ok_or_else(|| book_not_found(id)))
            }
        };

        match result {
            Ok(book) => {
                tracing::info!(id = book.id, title = %book.title, "Book saved");
                Ok(Submission::Saved(book))
            }
            Err(AppError::Validation(errors)) => {
                tracing::debug!(fields = errors.len(), "Book input rejected");
                let draft = match existing_id {
                    Some(id) => BookDraft::for_book(id, input),
                    None => BookDraft::new(input),
                };
                Ok(Submission::Invalid { errors, draft })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        let book = self.get_book(id).await?;
        if !self.store.destroy(book.id).await? {
            return Err(book_not_found(id));
        }
        tracing::info!(id, title = %book.title, "Book deleted");
        Ok(())
    }

    /// Whether the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await?;
        Ok(())
    }
}

fn book_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
