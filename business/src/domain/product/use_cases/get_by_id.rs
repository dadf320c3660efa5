use async_trait::async_trait;

use crate::domain::product::errors::ProductLookupError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductLookupError>;
}
