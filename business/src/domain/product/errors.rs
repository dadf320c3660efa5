use crate::domain::errors::TransportError;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductLookupError {
    #[error("product.not_found: {0}")]
    NotFound(ProductId),
    #[error("product.transport: {0}")]
    Transport(#[from] TransportError),
}
