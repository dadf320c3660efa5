use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Upper bound the presentation layer applies to requested quantities.
/// The cart itself never clamps.
pub const MAX_LINE_QUANTITY: u32 = 99;

pub const GST_RATE: f64 = 0.05;
pub const SURGE_FEE: f64 = 9.0;

/// Bounds a requested quantity into `0..=MAX_LINE_QUANTITY`.
pub fn clamp_requested_quantity(requested: i64) -> u32 {
    requested.clamp(0, i64::from(MAX_LINE_QUANTITY)) as u32
}

/// One row of the cart: a snapshot of the product taken when it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Totals shown on the cart screen. Pure function of the line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillSummary {
    pub subtotal: f64,
    pub gst: f64,
    pub surge_fee: f64,
    pub total: f64,
}

/// Ordered cart contents.
///
/// At most one line per product id and every line has a quantity of at least 1.
/// Lines keep their insertion order; quantity changes never reorder them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Quantity in cart for a product, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.find(product_id).map(|i| i.quantity).unwrap_or(0)
    }

    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn bill(&self) -> BillSummary {
        let subtotal = self.subtotal();
        let gst = subtotal * GST_RATE;
        let surge_fee = if self.items.is_empty() { 0.0 } else { SURGE_FEE };
        BillSummary {
            subtotal,
            gst,
            surge_fee,
            total: subtotal + gst + surge_fee,
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }

    /// Merges into an existing line (quantity only) or appends.
    /// Returns `false` when nothing changed.
    pub(crate) fn add(&mut self, item: CartLineItem) -> bool {
        if item.quantity == 0 {
            return false;
        }
        match self.position(item.product_id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
        true
    }

    /// Absolute set. A quantity of zero or below removes the line.
    pub(crate) fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let Some(idx) = self.position(product_id) else {
            return false;
        };
        if quantity <= 0 {
            self.items.remove(idx);
            return true;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let line = &mut self.items[idx];
        if line.quantity == quantity {
            return false;
        }
        line.quantity = quantity;
        true
    }

    pub(crate) fn remove(&mut self, product_id: ProductId) -> bool {
        match self.position(product_id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }
}
