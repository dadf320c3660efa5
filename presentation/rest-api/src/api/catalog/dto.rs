use poem_openapi::Object;

use business::domain::catalog::state::CatalogState;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    /// One of idle, loading, loaded, failed
    pub phase: String,
    pub loading: bool,
    /// User-facing message of the last failed request
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// Latest result, the stale list, or the built-in fallback
    pub products: Vec<ProductResponse>,
}

impl From<CatalogState> for CatalogResponse {
    fn from(state: CatalogState) -> Self {
        Self {
            phase: state.phase().to_string(),
            loading: state.loading,
            error: state.error,
            products: state.products.into_iter().map(Into::into).collect(),
        }
    }
}
