use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductLookupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductLookupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductLookupError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "product.not_found"),
            ),
            ProductLookupError::Transport(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("UpstreamError", "product.catalog_unavailable"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::TransportError;
    use business::domain::shared::value_objects::ProductId;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductLookupError::NotFound(ProductId::new(3)).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }

    #[test]
    fn should_map_transport_failure_to_502() {
        let (status, _json) =
            ProductLookupError::Transport(TransportError::status(500)).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
