//! Repository layer: the storage collaborator behind the catalog

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::StoreResult,
    models::{Book, BookInput, SearchFilter},
};

pub use books::BooksRepository;
pub use memory::MemoryBooksRepository;

/// Persistence and validation of books.
///
/// `create` and `update` check the storage rules before writing and report a
/// rejected input as [`StoreError::Validation`](crate::error::StoreError).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Total number of books
    async fn count(&self) -> StoreResult<i64>;

    /// One window of books ordered by id
    async fn find_page(&self, limit: i64, offset: i64) -> StoreResult<Vec<Book>>;

    /// All books accepted by `filter`, ordered by id
    async fn search(&self, filter: &SearchFilter) -> StoreResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Book>>;

    async fn create(&self, input: &BookInput) -> StoreResult<Book>;

    /// Replace the fields of book `id`; `None` when it no longer exists
    async fn update(&self, id: i32, input: &BookInput) -> StoreResult<Option<Book>>;

    /// Remove book `id`; `false` when there was nothing to remove
    async fn destroy(&self, id: i32) -> StoreResult<bool>;

    /// Check that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
