//! Business logic services

pub mod borrowing;
pub mod catalog;
pub mod lookup;

use std::sync::Arc;

use crate::{
    config::CatalogConfig,
    error::AppResult,
    repository::{BookStore, LoanStore, Repository},
};

use self::lookup::{CatalogLookup, HttpCatalogLookup};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub borrowing: borrowing::BorrowingService,
}

impl Services {
    /// Create all services with the given repository, looking books up over HTTP
    pub fn new(repository: Repository, catalog_config: &CatalogConfig) -> AppResult<Self> {
        let lookup = Arc::new(HttpCatalogLookup::new(catalog_config)?);
        Ok(Self::with_stores(
            Arc::new(repository.books),
            Arc::new(repository.loans),
            lookup,
            catalog_config.upsert_on_quantity_update,
        ))
    }

    /// Assemble services from explicit store and lookup implementations
    pub fn with_stores(
        books: Arc<dyn BookStore>,
        loans: Arc<dyn LoanStore>,
        lookup: Arc<dyn CatalogLookup>,
        upsert_on_quantity_update: bool,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(books, upsert_on_quantity_update),
            borrowing: borrowing::BorrowingService::new(loans, lookup),
        }
    }
}
