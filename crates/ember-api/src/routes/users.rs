//! User registration, login, and profile endpoints.

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::state::{AppState, SharedState};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use ember_auth::{
    hash_password, validate_password, verify_password, AuthError, AuthToken, TokenType,
    UserCredentials,
};

use serde::{Deserialize, Serialize};

/// Failed logins tolerated before the account locks.
const MAX_LOGIN_ATTEMPTS: i32 = 5;
/// Lock duration after too many failures (15 minutes).
const LOCK_DURATION_SECS: i64 = 900;

/// Create routes for user operations.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users/profile", get(get_profile).put(update_profile))
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    id: u64,
    name: String,
    email: String,
    is_admin: bool,
    token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    id: u64,
    name: String,
    email: String,
    is_admin: bool,
}

fn auth_response(state: &AppState, user: &UserCredentials) -> AuthResponse {
    let token = AuthToken::generate(TokenType::Access, user.user_id);
    let value = token.token.clone();
    state.store_token(token);

    AuthResponse {
        id: user.user_id.value(),
        name: user.name.clone(),
        email: user.email.clone(),
        is_admin: user.role.is_admin(),
        token: value,
    }
}

/// POST /api/users
async fn register(
    State(state): State<SharedState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if body.name.trim().is_empty() || body.email.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Name and email are required".to_string(),
        ));
    }
    if state.email_taken(&body.email) {
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }
    validate_password(&body.password)?;

    let hash = hash_password(&body.password)?;
    let id = state.next_user_id();
    let user = UserCredentials::new(id, body.name, body.email, hash);
    state.users.insert(id.value(), user.clone());

    tracing::info!(%id, "user registered");
    Ok((StatusCode::CREATED, Json(auth_response(&state, &user))))
}

/// POST /api/users/login
async fn login(
    State(state): State<SharedState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .find_user_by_email(&body.email)
        .ok_or(AuthError::InvalidCredentials)?;

    if user.is_locked() {
        return Err(AuthError::AccountLocked.into());
    }

    if !verify_password(&body.password, &user.password_hash)? {
        if let Some(mut entry) = state.users.get_mut(&user.user_id.value()) {
            entry.record_failed_attempt(MAX_LOGIN_ATTEMPTS, LOCK_DURATION_SECS);
            tracing::warn!(user = %user.user_id, attempts = entry.failed_attempts, "failed login");
        }
        return Err(AuthError::InvalidCredentials.into());
    }

    if let Some(mut entry) = state.users.get_mut(&user.user_id.value()) {
        entry.reset_failed_attempts();
    }

    Ok(Json(auth_response(&state, &user)))
}

/// GET /api/users/profile (bearer)
async fn get_profile(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = authenticate(&state, &headers)?;
    Ok(Json(ProfileResponse {
        id: user.user_id.value(),
        name: user.name,
        email: user.email,
        is_admin: user.role.is_admin(),
    }))
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PUT /api/users/profile (bearer)
///
/// Updates the provided fields and returns the profile with a fresh
/// token.
async fn update_profile(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = authenticate(&state, &headers)?;

    if let Some(email) = &body.email {
        if !email.eq_ignore_ascii_case(&user.email) && state.email_taken(email) {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }
    }
    let new_hash = match &body.password {
        Some(password) => {
            validate_password(password)?;
            Some(hash_password(password)?)
        }
        None => None,
    };

    let updated = {
        let mut entry = state
            .users
            .get_mut(&user.user_id.value())
            .ok_or_else(|| ApiError::Internal("user disappeared".to_string()))?;
        if let Some(name) = body.name {
            entry.set_name(name);
        }
        if let Some(email) = body.email {
            entry.set_email(email);
        }
        if let Some(hash) = new_hash {
            entry.set_password_hash(hash);
        }
        entry.clone()
    };

    Ok(Json(auth_response(&state, &updated)))
}
