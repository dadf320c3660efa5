use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::model::{CartLineItem, clamp_requested_quantity};
use business::domain::cart::store::CartStore;
use business::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    cart: Arc<dyn CartStore>,
    get_product_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl CartApi {
    pub fn new(
        cart: Arc<dyn CartStore>,
        get_product_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            cart,
            get_product_use_case,
        }
    }

    fn snapshot(&self) -> Json<CartResponse> {
        Json(self.cart.snapshot().into())
    }
}

/// Shopping cart API
///
/// One cart per running service, shared by every client.
#[OpenApi]
impl CartApi {
    /// Current cart with bill summary
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        self.snapshot()
    }

    /// Add a product to the cart
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let quantity = clamp_requested_quantity(body.0.quantity);
        if quantity == 0 {
            return AddToCartResponse::BadRequest(ErrorResponse::new(
                "ValidationError",
                "cart.quantity_must_be_positive",
            ));
        }

        let params = GetProductByIdParams {
            id: ProductId::new(body.0.product_id),
        };
        match self.get_product_use_case.execute(params).await {
            Ok(product) => {
                self.cart
                    .add_to_cart(CartLineItem::from_product(&product, quantity));
                AddToCartResponse::Ok(self.snapshot())
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::BadGateway(json),
                }
            }
        }
    }

    /// Set the quantity of a line
    ///
    /// Zero or below removes the line. Unknown products are ignored.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        product_id: Path<i64>,
        body: Json<UpdateQuantityRequest>,
    ) -> Json<CartResponse> {
        let requested = body.0.quantity;
        let quantity = if requested <= 0 {
            requested
        } else {
            i64::from(clamp_requested_quantity(requested))
        };
        self.cart
            .update_quantity(ProductId::new(product_id.0), quantity);
        self.snapshot()
    }

    /// Remove a line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, product_id: Path<i64>) -> Json<CartResponse> {
        self.cart.remove_item(ProductId::new(product_id.0));
        self.snapshot()
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> Json<CartResponse> {
        self.cart.clear_cart();
        self.snapshot()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
