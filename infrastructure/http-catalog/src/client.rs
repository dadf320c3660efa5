use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::errors::TransportError;
use business::domain::shared::value_objects::ProductId;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for the remote catalog.
pub struct CatalogHttpClient {
    pub client: Client,
    pub base_url: Url,
}

impl CatalogHttpClient {
    /// The base URL is treated as a directory: a missing trailing slash is added
    /// so endpoint paths are appended instead of replacing the last segment.
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { client, base_url }
    }

    /// `GET /products`
    pub fn products_url(&self) -> Result<Url, TransportError> {
        self.endpoint("products")
    }

    /// `GET /products/search?q=`
    pub fn search_url(&self, query: &str) -> Result<Url, TransportError> {
        let mut url = self.endpoint("products/search")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// `GET /products/{id}`
    pub fn product_url(&self, id: ProductId) -> Result<Url, TransportError> {
        self.endpoint(&format!("products/{}", id))
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::unreachable(format!("invalid endpoint {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogHttpClient {
        CatalogHttpClient::new(Url::parse(base).unwrap(), DEFAULT_TIMEOUT)
    }

    #[test]
    fn should_build_products_url_from_base() {
        let client = client(DEFAULT_BASE_URL);

        let url = client.products_url().unwrap();

        assert_eq!(url.as_str(), "https://dummyjson.com/products");
    }

    #[test]
    fn should_encode_search_query() {
        let client = client(DEFAULT_BASE_URL);

        let url = client.search_url("red lipstick & co").unwrap();

        assert_eq!(url.path(), "/products/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "red lipstick & co".to_string())]);
    }

    #[test]
    fn should_build_product_url_with_id() {
        let client = client(DEFAULT_BASE_URL);

        let url = client.product_url(ProductId::new(12)).unwrap();

        assert_eq!(url.as_str(), "https://dummyjson.com/products/12");
    }

    #[test]
    fn should_keep_base_path_without_trailing_slash() {
        let client = client("http://localhost:9000/api/v1");

        let url = client.products_url().unwrap();

        assert_eq!(url.as_str(), "http://localhost:9000/api/v1/products");
    }
}
