use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "basket.not_found"),
            BasketError::QuantityZero => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.quantity_zero_use_delete",
            ),
            BasketError::QuantityNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.quantity_not_positive",
            ),
            BasketError::InvalidRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.invalid_range",
            ),
            BasketError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
