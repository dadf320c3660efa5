use crate::domain::shared::value_objects::ProductId;

/// A catalog entry as produced by the catalog client. Never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub image_url: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        rating: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            rating,
            image_url: image_url.into(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_product_from_raw_values() {
        let product = Product::new(3, "Lipstick", 12.5, 4.2, "https://cdn/thumb.png");

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.title, "Lipstick");
        assert_eq!(product.price, 12.5);
        assert!(product.has_image());
    }

    #[test]
    fn should_report_missing_image() {
        let product = Product::new(1, "Sample", 1.0, 1.0, "");
        assert!(!product.has_image());
    }
}
