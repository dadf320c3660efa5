use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::store::CatalogSessionStore;

use crate::api::catalog::dto::CatalogResponse;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    store: Arc<dyn CatalogSessionStore>,
}

impl CatalogApi {
    pub fn new(store: Arc<dyn CatalogSessionStore>) -> Self {
        Self { store }
    }
}

/// Catalog browsing API
///
/// Every endpoint answers with a snapshot of the catalog session. Failures of
/// the remote source show up as `error` next to a non-empty product list.
#[OpenApi]
impl CatalogApi {
    /// Current catalog snapshot
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get(&self) -> Json<CatalogResponse> {
        Json(self.store.snapshot().into())
    }

    /// Reload the full catalog
    #[oai(path = "/catalog/load", method = "post", tag = "ApiTags::Catalog")]
    async fn load(&self) -> Json<CatalogResponse> {
        self.store.load().await;
        Json(self.store.snapshot().into())
    }

    /// Search the catalog
    ///
    /// A missing or blank query reloads the full catalog.
    #[oai(path = "/catalog/search", method = "post", tag = "ApiTags::Catalog")]
    async fn search(&self, q: Query<Option<String>>) -> Json<CatalogResponse> {
        let query = q.0.unwrap_or_default();
        self.store.search(&query).await;
        Json(self.store.snapshot().into())
    }
}
