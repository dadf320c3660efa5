#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
    #[error("config.invalid_catalog_base_url: {0}")]
    InvalidCatalogBaseUrl(String),
    #[error("config.invalid_catalog_timeout: {0}")]
    InvalidCatalogTimeout(String),
}
