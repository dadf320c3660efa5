use poem_openapi::Object;

use business::domain::cart::model::{BillSummary, CartLineItem, CartState};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Product to add, resolved from the catalog
    pub product_id: i64,
    /// Requested quantity, bounded to 0..=99
    #[oai(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New absolute quantity; zero or below removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineItemResponse {
    pub product_id: i64,
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: u32,
    pub line_total: f64,
}

impl From<&CartLineItem> for CartLineItemResponse {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id.value(),
            title: item.title.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BillResponse {
    pub subtotal: f64,
    pub gst: f64,
    pub surge_fee: f64,
    pub total: f64,
}

impl From<BillSummary> for BillResponse {
    fn from(bill: BillSummary) -> Self {
        Self {
            subtotal: bill.subtotal,
            gst: bill.gst,
            surge_fee: bill.surge_fee,
            total: bill.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineItemResponse>,
    /// Sum of all quantities
    pub item_count: u64,
    pub bill: BillResponse,
}

impl From<CartState> for CartResponse {
    fn from(cart: CartState) -> Self {
        Self {
            items: cart.items().iter().map(Into::into).collect(),
            item_count: cart.item_count(),
            bill: cart.bill().into(),
        }
    }
}
