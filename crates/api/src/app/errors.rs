use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_products::AppError;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub const INVALID_INPUT: &str = "C001";
pub const INTERNAL_ERROR: &str = "C003";
pub const PRODUCT_NOT_FOUND: &str = "P001";
pub const INVALID_PRICE: &str = "P002";
pub const OUT_OF_STOCK: &str = "P003";

pub fn app_error_to_response(err: AppError) -> axum::response::Response {
    match err {
        AppError::Domain(e) => {
            tracing::warn!(error = %e, "request rejected");
            domain_error_to_response(e)
        }
        AppError::Catalog(e) => {
            tracing::error!(error = %e, "catalog failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                "internal server error",
            )
        }
    }
}

fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND, message),
        DomainError::InvalidAmount => json_error(StatusCode::BAD_REQUEST, INVALID_PRICE, message),
        DomainError::OutOfStock { .. } | DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, OUT_OF_STOCK, message)
        }
        DomainError::InvalidQuantity(_) | DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, INVALID_INPUT, message)
        }
    }
}

pub fn validation_error(errors: Vec<FieldError>) -> axum::response::Response {
    tracing::warn!(fields = errors.len(), "request validation failed");
    error_body(
        StatusCode::BAD_REQUEST,
        INVALID_INPUT,
        "invalid input value",
        errors,
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    error_body(status, code, message, Vec::new())
}

fn error_body(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    errors: Vec<FieldError>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "code": code,
            "message": message.into(),
            "errors": errors,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;
    use stockroom_products::CatalogError;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::NotFound(ProductId::new()), StatusCode::NOT_FOUND),
            (DomainError::InvalidAmount, StatusCode::BAD_REQUEST),
            (DomainError::out_of_stock(None, 5, 0), StatusCode::BAD_REQUEST),
            (DomainError::InsufficientStock { current: 1 }, StatusCode::BAD_REQUEST),
            (DomainError::InvalidQuantity(0), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(app_error_to_response(err.into()).status(), status);
        }
    }

    #[test]
    fn catalog_errors_are_internal() {
        let resp = app_error_to_response(CatalogError::Unavailable("down".into()).into());
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
