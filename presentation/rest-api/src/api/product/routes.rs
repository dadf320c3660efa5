use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl ProductApi {
    pub fn new(get_by_id_use_case: Arc<dyn GetProductByIdUseCase>) -> Self {
        Self { get_by_id_use_case }
    }
}

/// Product detail API
#[OpenApi]
impl ProductApi {
    /// Get a product
    ///
    /// Looks the product up in the catalog currently shown and falls back to
    /// the remote source when it is not there.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_by_id(&self, id: Path<i64>) -> GetProductResponse {
        let params = GetProductByIdParams {
            id: ProductId::new(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
