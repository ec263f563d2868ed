use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use utoipa::ToSchema;

/// Documented shape of every error body.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type. Every variant maps to one HTTP status and a
/// `{"error": "..."}` body, which is the only error shape the API emits.
#[derive(Debug)]
pub enum AppError {
    /// Authorization header absent or not `Bearer <token>`.
    MissingToken,
    /// Token signature is valid but the token is past its expiry.
    TokenExpired,
    /// Token failed signature or shape checks.
    InvalidToken,
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    NotFound(String),
    UnprocessableEntity(String),
    InternalError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::TokenExpired | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::MissingToken => "No token provided",
            AppError::TokenExpired => "Token expired",
            AppError::InvalidToken => "Invalid token",
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message()
        }));

        (self.status(), body).into_response()
    }
}

/// Database failures are never surfaced verbatim; the real error goes to
/// the logs and the client sees a generic 500.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        AppError::InternalError("Internal server error".to_string())
    }
}
