//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::{config::CatalogConfig, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services on top of the given book store
    pub fn new(store: Arc<dyn BookStore>, catalog_config: &CatalogConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store, catalog_config.page_size),
        }
    }
}
