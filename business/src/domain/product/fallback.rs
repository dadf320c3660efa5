use super::model::Product;

/// Built-in catalog shown when the remote source cannot be reached.
pub fn fallback_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Sample Product A", 99.0, 4.5, ""),
        Product::new(2, "Sample Product B", 149.1, 4.0, ""),
        Product::new(3, "Sample Product C", 79.5, 3.8, ""),
    ]
}
