//! Catalog lookup client
//!
//! Resolves a book id against the catalog service's `GET /book/{id}` endpoint.
//! Every failure comes back as [`AppError::DependencyUnavailable`]; callers
//! enriching a batch drop the affected entry instead of failing the batch.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::book::Book,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn fetch_book(&self, id: Uuid) -> AppResult<Book>;
}

/// Lookup over HTTP. The client timeout is the only bound on a slow catalog.
#[derive(Clone)]
pub struct HttpCatalogLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogLookup {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogLookup for HttpCatalogLookup {
    async fn fetch_book(&self, id: Uuid) -> AppResult<Book> {
        let url = format!("{}/book/{}", self.base_url, id);
        let unavailable = |e: reqwest::Error| AppError::DependencyUnavailable(format!("{}: {}", url, e));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        response.json::<Book>().await.map_err(unavailable)
    }
}
