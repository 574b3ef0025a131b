use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::{InvalidPurchase, PurchaseError, ServiceError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidPurchase(InvalidPurchase),

    #[error("Upstream service failed: {0}")]
    Upstream(ServiceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PurchaseError> for AppError {
    fn from(e: PurchaseError) -> Self {
        match e {
            PurchaseError::Invalid(reason) => AppError::InvalidPurchase(reason),
            PurchaseError::Collaborator(err) => AppError::Upstream(err),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPurchase(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidPurchase(reason) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": reason.to_string(),
                    "code": reason.code()
                }))
            }
            AppError::Upstream(err) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": err.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn invalid_purchase_returns_400() {
        let resp = AppError::InvalidPurchase(InvalidPurchase::MissingAdult).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failure_returns_502() {
        let err = AppError::Upstream(ServiceError::Unavailable("timeout".to_string()));
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_purchase_display_is_the_rule_message() {
        assert_eq!(
            AppError::InvalidPurchase(InvalidPurchase::TooManyTickets).to_string(),
            "Cannot purchase more than 25 tickets"
        );
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn rejected_purchase_maps_to_invalid_purchase() {
        let app_err: AppError = PurchaseError::Invalid(InvalidPurchase::InvalidAccount).into();
        assert!(matches!(
            app_err,
            AppError::InvalidPurchase(InvalidPurchase::InvalidAccount)
        ));
    }

    #[test]
    fn collaborator_failure_keeps_the_original_error() {
        let original = ServiceError::Rejected("card declined".to_string());
        let app_err: AppError = PurchaseError::Collaborator(original.clone()).into();
        assert!(matches!(app_err, AppError::Upstream(ref e) if *e == original));
    }
}
