use serde::Deserialize;

use business::domain::product::model::Product;

/// Body of `GET /products` and `GET /products/search`.
/// Paging fields (`total`, `skip`, `limit`) are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
}

/// Server product record. Only the fields the session needs are read.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
}

impl ProductDto {
    /// One-to-one mapping; `thumbnail` becomes `image_url`.
    pub fn into_domain(self) -> Product {
        Product::new(self.id, self.title, self.price, self.rating, self.thumbnail)
    }
}

impl ProductsResponse {
    pub fn into_domain(self) -> Vec<Product> {
        self.products.into_iter().map(ProductDto::into_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartLineItem;
    use business::domain::shared::value_objects::ProductId;

    const PRODUCTS_BODY: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "Popular mascara",
                "category": "beauty",
                "price": 9.99,
                "rating": 2.56,
                "stock": 99,
                "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png"
            },
            {
                "id": 2,
                "title": "Eyeshadow Palette with Mirror",
                "price": 19.99,
                "rating": 2.86,
                "thumbnail": "T"
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn should_map_products_response_in_order() {
        let response: ProductsResponse = serde_json::from_str(PRODUCTS_BODY).unwrap();

        let products = response.into_domain();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(
            products[0].image_url,
            "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png"
        );
        assert_eq!(products[1].title, "Eyeshadow Palette with Mirror");
    }

    #[test]
    fn should_carry_thumbnail_into_cart_line_item() {
        let response: ProductsResponse = serde_json::from_str(PRODUCTS_BODY).unwrap();
        let product = response.into_domain().remove(1);

        let item = CartLineItem::from_product(&product, 1);

        assert_eq!(item.image_url, "T");
        assert_eq!(item.price, 19.99);
        assert_eq!(item.title, "Eyeshadow Palette with Mirror");
    }

    #[test]
    fn should_default_missing_thumbnail_to_empty() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"id": 7, "title": "Soap", "price": 2.0, "rating": 4.0}"#)
                .unwrap();

        assert_eq!(dto.into_domain().image_url, "");
    }

    #[test]
    fn should_reject_record_without_price() {
        let result: Result<ProductDto, _> =
            serde_json::from_str(r#"{"id": 7, "title": "Soap", "rating": 4.0}"#);

        assert!(result.is_err());
    }
}
