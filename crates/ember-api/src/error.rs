//! API error type and its wire mapping.
//!
//! Every error leaves the service as `{"success": false, "message": ...}`
//! with the matching HTTP status, the shape the storefront client expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ember_auth::AuthError;
use serde_json::json;
use thiserror::Error;

/// Service-level error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or conflicting request data.
    #[error("{0}")]
    BadRequest(String),

    /// Missing, invalid, or insufficient credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected server-side failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserAlreadyExists(_) => {
                ApiError::BadRequest("User already exists".to_string())
            }
            AuthError::InvalidCredentials | AuthError::UserNotFound(_) => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::AccountLocked => ApiError::Unauthorized(
                "Account locked due to too many failed attempts".to_string(),
            ),
            AuthError::InvalidToken | AuthError::TokenExpired => {
                ApiError::Unauthorized("Not authorized, token failed".to_string())
            }
            AuthError::InsufficientPermissions => {
                ApiError::Unauthorized("Not authorized as an admin".to_string())
            }
            AuthError::WeakPassword(msg) => ApiError::BadRequest(msg),
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_messages() {
        let err: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid email or password");

        let err: ApiError = AuthError::TokenExpired.into();
        assert_eq!(err.to_string(), "Not authorized, token failed");

        let err: ApiError = AuthError::InsufficientPermissions.into();
        assert_eq!(err.to_string(), "Not authorized as an admin");

        let err: ApiError = AuthError::UserAlreadyExists("a@b.c".into()).into();
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
