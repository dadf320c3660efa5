use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog key
    pub id: i64,
    pub title: String,
    pub price: f64,
    /// Average rating between 0 and 5
    pub rating: f64,
    /// Thumbnail URL, empty for built-in products
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            price: product.price,
            rating: product.rating,
            image_url: product.image_url,
        }
    }
}
