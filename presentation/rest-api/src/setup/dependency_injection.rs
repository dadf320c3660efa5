use std::sync::Arc;

use logger::TracingLogger;

use http_catalog::client::CatalogHttpClient;
use http_catalog::product_catalog::ProductCatalogHttp;

use business::application::cart::store::CartStoreImpl;
use business::application::catalog::session_store::CatalogSessionStoreImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::catalog::store::CatalogSessionStore;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductCatalogClient;

use crate::config::catalog_config::CatalogConfig;

/// Session wiring: one catalog session and one cart, shared by every API.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    /// Must run inside the tokio runtime: the catalog session starts loading here.
    pub fn new(config: &CatalogConfig) -> Self {
        let http_client = CatalogHttpClient::new(config.base_url.clone(), config.timeout);
        let catalog_client = Arc::new(ProductCatalogHttp::new(http_client));

        Self::with_client(catalog_client, Arc::new(TracingLogger))
    }

    pub fn with_client(client: Arc<dyn ProductCatalogClient>, logger: Arc<dyn Logger>) -> Self {
        let health_api = crate::api::health::routes::Api::new();

        let catalog_store: Arc<dyn CatalogSessionStore> =
            CatalogSessionStoreImpl::start(client.clone(), logger.clone());
        let cart_store: Arc<dyn CartStore> = Arc::new(CartStoreImpl::new(logger.clone()));

        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog_store.clone(),
            client,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(catalog_store.clone());
        let product_api =
            crate::api::product::routes::ProductApi::new(get_product_use_case.clone());
        let cart_api =
            crate::api::cart::routes::CartApi::new(cart_store, get_product_use_case);

        Self {
            health_api,
            catalog_api,
            product_api,
            cart_api,
        }
    }
}
