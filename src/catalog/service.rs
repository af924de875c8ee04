//! Catalogue service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::{ApiClient, ApiError, endpoints},
    catalog::{CatalogServiceError, Product},
};

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the full food catalogue.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: &str) -> Result<Product, CatalogServiceError>;

    /// Search the catalogue.
    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogServiceError>;
}

/// [`CatalogService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: ApiClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        let body = self.client.get(endpoints::PRODUCTS, &[]).await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogServiceError> {
        let body = self.client.get(&endpoints::product_detail(id), &[]).await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let body = self
            .client
            .get(endpoints::SEARCH_PRODUCTS, &[("query", query)])
            .await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }
}
