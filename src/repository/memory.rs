//! In-process books repository, used when no database is configured

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{Book, BookInput, SearchFilter},
};

#[derive(Default)]
struct Shelf {
    next_id: i32,
    books: BTreeMap<i32, Book>,
}

/// Books kept in a map keyed by id; contents are lost on restart
#[derive(Default)]
pub struct MemoryBooksRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBooksRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBooksRepository {
    async fn count(&self) -> StoreResult<i64> {
        Ok(self.shelf.read().await.books.len() as i64)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> StoreResult<Vec<Book>> {
        let shelf = self.shelf.read().await;
        Ok(shelf
            .books
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn search(&self, filter: &SearchFilter) -> StoreResult<Vec<Book>> {
        let shelf = self.shelf.read().await;
        Ok(shelf
            .books
            .values()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Book>> {
        Ok(self.shelf.read().await.books.get(&id).cloned())
    }

    async fn create(&self, input: &BookInput) -> StoreResult<Book> {
        let record = input.validated().map_err(StoreError::Validation)?;

        let mut shelf = self.shelf.write().await;
        shelf.next_id += 1;
        let now = Utc::now();
        let book = Book {
            id: shelf.next_id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            year: record.year,
            created_at: now,
            updated_at: now,
        };
        shelf.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, input: &BookInput) -> StoreResult<Option<Book>> {
        let record = input.validated().map_err(StoreError::Validation)?;

        let mut shelf = self.shelf.write().await;
        let Some(book) = shelf.books.get_mut(&id) else {
            return Ok(None);
        };
        book.title = record.title;
        book.author = record.author;
        book.genre = record.genre;
        book.year = record.year;
        book.updated_at = Utc::now();
        Ok(Some(book.clone()))
    }

    async fn destroy(&self, id: i32) -> StoreResult<bool> {
        Ok(self.shelf.write().await.books.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, author: &str) -> BookInput {
        BookInput {
            title: title.to_string(),
            author: author.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let repo = MemoryBooksRepository::new();
        let a = repo.create(&input("A", "x")).await.unwrap();
        let b = repo.create(&input("B", "y")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn invalid_input_is_not_stored() {
        let repo = MemoryBooksRepository::new();
        let err = repo.create(&input("", "")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref e) if e.len() == 2));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn pages_follow_id_order() {
        let repo = MemoryBooksRepository::new();
        for i in 0..5 {
            repo.create(&input(&format!("Book {i}"), "x")).await.unwrap();
        }
        let page: Vec<i32> = repo
            .find_page(2, 2)
            .await
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(page, vec![3, 4]);
    }

    #[tokio::test]
    async fn update_and_destroy_report_missing_rows() {
        let repo = MemoryBooksRepository::new();
        assert_eq!(repo.update(42, &input("A", "x")).await.unwrap(), None);
        assert!(!repo.destroy(42).await.unwrap());

        let book = repo.create(&input("A", "x")).await.unwrap();
        let updated = repo.update(book.id, &input("B", "y")).await.unwrap().unwrap();
        assert_eq!(updated.title, "B");
        assert!(repo.destroy(book.id).await.unwrap());
        assert_eq!(repo.find_by_id(book.id).await.unwrap(), None);
    }
}
