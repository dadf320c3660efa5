use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::errors::TransportError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductCatalogClient;
use business::domain::shared::value_objects::ProductId;

use crate::client::CatalogHttpClient;
use crate::dto::{ProductDto, ProductsResponse};

/// [`ProductCatalogClient`] over the remote JSON product API.
pub struct ProductCatalogHttp {
    client: CatalogHttpClient,
}

impl ProductCatalogHttp {
    pub fn new(client: CatalogHttpClient) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TransportError> {
        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::unreachable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| TransportError::malformed(e.to_string()))
    }
}

#[async_trait]
impl ProductCatalogClient for ProductCatalogHttp {
    async fn fetch_all(&self) -> Result<Vec<Product>, TransportError> {
        let url = self.client.products_url()?;
        let response: ProductsResponse = self.get_json(url).await?;
        Ok(response.into_domain())
    }

    async fn search_by_query(&self, query: &str) -> Result<Vec<Product>, TransportError> {
        let url = self.client.search_url(query)?;
        let response: ProductsResponse = self.get_json(url).await?;
        Ok(response.into_domain())
    }

    async fn fetch_by_id(&self, id: ProductId) -> Result<Product, TransportError> {
        let url = self.client.product_url(id)?;
        let dto: ProductDto = self.get_json(url).await.map_err(|e| match e {
            TransportError::Status(code) if code == StatusCode::NOT_FOUND.as_u16() => {
                TransportError::NotFound
            }
            other => other,
        })?;
        Ok(dto.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_TIMEOUT;
    use reqwest::Client;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn local_client(base: Url) -> CatalogHttpClient {
        let client = Client::builder()
            .no_proxy()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap();
        CatalogHttpClient::with_client(client, base)
    }

    /// Serves a single canned HTTP response and yields the request line it received.
    async fn serve_once(status: &str, body: &str) -> (ProductCatalogHttp, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let text = String::from_utf8_lossy(&request).to_string();
            text.lines().next().unwrap_or_default().to_string()
        });

        let base = Url::parse(&format!("http://{}/", addr)).unwrap();
        let catalog = ProductCatalogHttp::new(local_client(base));
        (catalog, handle)
    }

    #[tokio::test]
    async fn should_fetch_all_products() {
        let body = r#"{"products":[{"id":1,"title":"Mascara","price":9.99,"rating":4.5,"thumbnail":"T"}],"total":1}"#;
        let (catalog, request) = serve_once("200 OK", body).await;

        let products = catalog.fetch_all().await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /products HTTP/1.1");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].image_url, "T");
    }

    #[tokio::test]
    async fn should_send_search_query_parameter() {
        let (catalog, request) = serve_once("200 OK", r#"{"products":[]}"#).await;

        let products = catalog.search_by_query("phone").await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /products/search?q=phone HTTP/1.1");
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_fail_with_status_on_server_error() {
        let (catalog, _request) = serve_once("503 Service Unavailable", "{}").await;

        let result = catalog.fetch_all().await;

        assert_eq!(result.unwrap_err(), TransportError::Status(503));
    }

    #[tokio::test]
    async fn should_fail_with_malformed_payload() {
        let (catalog, _request) = serve_once("200 OK", r#"{"items": 3}"#).await;

        let result = catalog.fetch_all().await;

        assert!(matches!(
            result.unwrap_err(),
            TransportError::MalformedPayload(_)
        ));
    }

    #[tokio::test]
    async fn should_map_missing_product_to_not_found() {
        let (catalog, _request) = serve_once("404 Not Found", r#"{"message":"not found"}"#).await;

        let result = catalog.fetch_by_id(ProductId::new(4040)).await;

        assert_eq!(result.unwrap_err(), TransportError::NotFound);
    }

    #[tokio::test]
    async fn should_fetch_single_product_by_id() {
        let body = r#"{"id":12,"title":"Lipstick","price":12.99,"rating":4.1,"thumbnail":"L"}"#;
        let (catalog, request) = serve_once("200 OK", body).await;

        let product = catalog.fetch_by_id(ProductId::new(12)).await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /products/12 HTTP/1.1");
        assert_eq!(product.title, "Lipstick");
    }

    #[tokio::test]
    async fn should_fail_unreachable_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let base = Url::parse(&format!("http://{}/", addr)).unwrap();
        let catalog = ProductCatalogHttp::new(local_client(base));

        let result = catalog.fetch_all().await;

        assert!(matches!(result.unwrap_err(), TransportError::Unreachable(_)));
    }
}
