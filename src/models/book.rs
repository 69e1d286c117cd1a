//! Book model and the form-side types around it.
//!
//! `BookInput` is what a form submits, `BookRecord` is the same data once the
//! storage rules accepted it, and `BookDraft` is the unsaved copy shown back to
//! the user when they did not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Persisted catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw book fields as submitted by the new/update forms.
///
/// Every field is text; fields missing from the body deserialize as empty
/// strings so they are reported by validation instead of rejected outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookInput {
    #[validate(custom(function = "title_present"))]
    pub title: String,
    #[validate(custom(function = "author_present"))]
    pub author: String,
    pub genre: String,
    #[validate(custom(function = "year_is_integer"))]
    pub year: String,
}

/// Book fields after validation and coercion, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// One validation message attached to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Unsaved book shown back on a form; never written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub input: BookInput,
}

/// Order in which field errors are listed on the form
const FIELD_ORDER: [&str; 4] = ["title", "author", "genre", "year"];

impl BookInput {
    /// Check the storage rules and coerce the text fields.
    ///
    /// Blank `genre` and `year` become `None`.
    pub fn validated(&self) -> Result<BookRecord, Vec<FieldError>> {
        self.validate().map_err(|errors| field_errors(&errors))?;

        let year = match self.year.trim() {
            "" => None,
            year => Some(year.parse::<i32>().map_err(|_| {
                vec![FieldError {
                    field: "year".to_string(),
                    message: YEAR_MESSAGE.to_string(),
                }]
            })?),
        };

        Ok(BookRecord {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: (!self.genre.is_empty()).then(|| self.genre.clone()),
            year,
        })
    }
}

impl BookDraft {
    /// Draft for the creation form
    pub fn new(input: BookInput) -> Self {
        Self { id: None, input }
    }

    /// Draft for the update form, keeping the id of the book being edited
    pub fn for_book(id: i32, input: BookInput) -> Self {
        Self { id: Some(id), input }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self::for_book(
            book.id,
            BookInput {
                title: book.title.clone(),
                author: book.author.clone(),
                genre: book.genre.clone().unwrap_or_default(),
                year: book.year.map(|y| y.to_string()).unwrap_or_default(),
            },
        )
    }
}

const YEAR_MESSAGE: &str = "Please provide a whole number for \"Year\"";

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(message.into());
        return Err(error);
    }
    Ok(())
}

fn title_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Please provide a value for \"Title\"")
}

fn author_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Please provide a value for \"Author\"")
}

fn year_is_integer(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.parse::<i32>().is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new("integer");
    error.message = Some(YEAR_MESSAGE.into());
    Err(error)
}

/// Flatten validator output into form-ordered messages
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("\"{}\" is invalid", field)),
            })
        })
        .collect();

    out.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    out
}
