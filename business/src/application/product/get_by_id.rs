use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::store::CatalogSessionStore;
use crate::domain::errors::TransportError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductLookupError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductCatalogClient;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

/// Resolves a product from the catalog currently shown, asking the remote
/// source only when the id is not in the snapshot.
pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn CatalogSessionStore>,
    pub client: Arc<dyn ProductCatalogClient>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductLookupError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        if let Some(product) = self.catalog.snapshot().find_product(params.id) {
            return Ok(product.clone());
        }

        self.logger.debug(&format!(
            "Product {} not in current catalog, asking remote source",
            params.id
        ));

        let product = self
            .client
            .fetch_by_id(params.id)
            .await
            .map_err(|e| match e {
                TransportError::NotFound => ProductLookupError::NotFound(params.id),
                other => ProductLookupError::Transport(other),
            })?;

        Ok(product)
    }
}
