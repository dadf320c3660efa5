use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::cart::model::{CartLineItem, CartState};
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::shared::observable::Observable;
use crate::domain::shared::value_objects::ProductId;

/// Process-wide cart. Construct once per session and share the `Arc`.
pub struct CartStoreImpl {
    state: Observable<CartState>,
    pub logger: Arc<dyn Logger>,
}

impl CartStoreImpl {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            state: Observable::new(CartState::default()),
            logger,
        }
    }
}

impl CartStore for CartStoreImpl {
    fn add_to_cart(&self, item: CartLineItem) {
        let product_id = item.product_id;
        let quantity = item.quantity;
        if self.state.update_if(|cart| cart.add(item)) {
            self.logger.debug(&format!(
                "Added {} of product {} to cart",
                quantity, product_id
            ));
        } else {
            self.logger.debug(&format!(
                "Ignored add of product {} with quantity 0",
                product_id
            ));
        }
    }

    fn update_quantity(&self, product_id: ProductId, quantity: i64) {
        if self
            .state
            .update_if(|cart| cart.set_quantity(product_id, quantity))
        {
            if quantity <= 0 {
                self.logger
                    .debug(&format!("Removed product {} from cart", product_id));
            } else {
                self.logger.debug(&format!(
                    "Set quantity of product {} to {}",
                    product_id, quantity
                ));
            }
        } else {
            self.logger.debug(&format!(
                "Quantity update for product {} left cart unchanged",
                product_id
            ));
        }
    }

    fn remove_item(&self, product_id: ProductId) {
        if self.state.update_if(|cart| cart.remove(product_id)) {
            self.logger
                .debug(&format!("Removed product {} from cart", product_id));
        }
    }

    fn clear_cart(&self) {
        self.state.update_if(CartState::clear);
        self.logger.debug("Cart cleared");
    }

    fn snapshot(&self) -> CartState {
        self.state.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}
