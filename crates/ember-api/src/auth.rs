//! Bearer-token authentication for protected routes.

use crate::error::ApiError;
use crate::state::AppState;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use ember_auth::UserCredentials;

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))
}

/// Resolve the bearer token to its user, rejecting unknown, expired, or
/// consumed tokens.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<UserCredentials, ApiError> {
    let token = bearer_token(headers)?;

    let user_id = {
        let entry = state.tokens.get(token).ok_or_else(token_failed)?;
        if !entry.is_valid() {
            return Err(token_failed());
        }
        entry.user_id
    };

    state
        .users
        .get(&user_id.value())
        .map(|u| u.clone())
        .ok_or_else(token_failed)
}

/// Like [`authenticate`], but additionally requires the admin role.
pub fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<UserCredentials, ApiError> {
    let user = authenticate(state, headers)?;
    if !user.role.is_admin() {
        return Err(ApiError::Unauthorized(
            "Not authorized as an admin".to_string(),
        ));
    }
    Ok(user)
}

fn token_failed() -> ApiError {
    ApiError::Unauthorized("Not authorized, token failed".to_string())
}
