use std::fmt;

/// Unique catalog key of a product.
/// Also the key of a cart line item, at most one line per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_raw_value() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        let id_1 = ProductId::new(5);
        let id_2: ProductId = 5.into();
        let id_3 = ProductId::new(6);

        assert_eq!(id_1, id_2);
        assert_ne!(id_1, id_3);
    }
}
