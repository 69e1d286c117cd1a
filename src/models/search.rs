//! Free-text search across the book columns

use sqlx::{Postgres, QueryBuilder};

use super::book::Book;

/// Substring filter over title, author, genre and year.
///
/// A row matches when the term occurs in any of the four columns; the year is
/// compared as its decimal text. An empty term matches every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Column expressions the term is matched against
    pub const COLUMNS: [&'static str; 4] = ["title", "author", "genre", "CAST(year AS TEXT)"];

    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `LIKE` pattern with the term's own wildcard characters escaped
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Append `(col LIKE $n OR ...)` to a query, binding the pattern per column
    pub fn push_condition(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let pattern = self.like_pattern();
        builder.push("(");
        for (i, column) in Self::COLUMNS.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" LIKE ");
            builder.push_bind(pattern.clone());
        }
        builder.push(")");
    }

    /// Evaluate the filter against a book held in memory
    pub fn matches(&self, book: &Book) -> bool {
        let term = self.term.as_str();
        book.title.contains(term)
            || book.author.contains(term)
            || book.genre.as_deref().is_some_and(|g| g.contains(term))
            || book.year.is_some_and(|y| y.to_string().contains(term))
    }
}
