use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub type StorefrontApi = OpenApiService<(HealthApi, CatalogApi, ProductApi, CartApi), ()>;

pub struct Server;

impl Server {
    pub fn api_service(container: DependencyContainer) -> StorefrontApi {
        OpenApiService::new(
            (
                container.health_api,
                container.catalog_api,
                container.product_api,
                container.cart_api,
            ),
            "Storefront Session API",
            env!("CARGO_PKG_VERSION"),
        )
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = Self::api_service(container).server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
