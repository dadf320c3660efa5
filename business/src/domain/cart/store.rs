use tokio::sync::watch;

use crate::domain::shared::value_objects::ProductId;

use super::model::{CartLineItem, CartState};

/// Owner of the session cart.
///
/// Operations are synchronous and have no failure mode: unknown ids and
/// non-positive quantities are defined behavior, not errors.
pub trait CartStore: Send + Sync {
    fn add_to_cart(&self, item: CartLineItem);
    fn update_quantity(&self, product_id: ProductId, quantity: i64);
    fn remove_item(&self, product_id: ProductId);
    fn clear_cart(&self);
    fn snapshot(&self) -> CartState;
    fn subscribe(&self) -> watch::Receiver<CartState>;
}
