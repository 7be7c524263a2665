use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Errors surfaced by the matching operations
///
/// The display text carries the detailed reason for logs; clients only ever
/// see the fixed public message for each kind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MatchError {
    pub fn public_message(&self) -> &'static str {
        match self {
            MatchError::InvalidInput(_) => "Missing required parameters",
            MatchError::CatalogNotFound(_) => "Supermarket not supported or no products found",
            MatchError::Internal(_) => "Internal server error",
        }
    }
}

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MatchError::CatalogNotFound(_) => StatusCode::NOT_FOUND,
            MatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            MatchError::Internal(_) => tracing::error!("{}", self),
            _ => tracing::info!("{}", self),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

/// Handle JSON payload errors (malformed body, missing or mistyped fields)
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    MatchError::InvalidInput(format!("Invalid JSON: {}", err)).into()
}
