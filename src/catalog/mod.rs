//! Food catalogue: product models and the listing/search service.

mod errors;
mod models;
mod service;

pub use errors::CatalogServiceError;
pub use models::{AddOn, Nutrition, Product, ProductId};
pub use service::{CatalogService, HttpCatalogService, MockCatalogService};
