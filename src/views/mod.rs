//! Server-side HTML views

use minijinja::Environment;
use serde_json::Value;

use crate::error::AppResult;

/// Book list and search results
pub const INDEX: &str = "index";
pub const NEW_BOOK: &str = "new-book";
pub const UPDATE_BOOK: &str = "update-book";
pub const PAGE_NOT_FOUND: &str = "page-not-found";
/// Generic failure page
pub const ERROR: &str = "error";

/// Turns a view name and its data into an HTML document
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: Value) -> AppResult<String>;
}

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("book-form.html", include_str!("../../templates/book-form.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("new-book.html", include_str!("../../templates/new-book.html")),
    ("update-book.html", include_str!("../../templates/update-book.html")),
    ("page-not-found.html", include_str!("../../templates/page-not-found.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

/// Views compiled into the binary and rendered with minijinja.
///
/// Templates end in `.html`, so output is HTML-escaped.
pub struct TemplateViews {
    env: Environment<'static>,
}

impl TemplateViews {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }
}

impl ViewRenderer for TemplateViews {
    fn render(&self, view: &str, context: Value) -> AppResult<String> {
        let template = self.env.get_template(&format!("{}.html", view))?;
        Ok(template.render(context)?)
    }
}
