use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Port to the remote product source.
///
/// Each call either returns the full normalized result or fails; no partial
/// results and no retries at this layer.
#[async_trait]
pub trait ProductCatalogClient: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, TransportError>;
    async fn search_by_query(&self, query: &str) -> Result<Vec<Product>, TransportError>;
    async fn fetch_by_id(&self, id: ProductId) -> Result<Product, TransportError>;
}
