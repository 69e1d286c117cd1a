//! Data models for Bookshelf

pub mod book;
pub mod pagination;
pub mod search;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookInput, BookRecord, FieldError};
pub use pagination::{Page, PageQuery};
pub use search::SearchFilter;
