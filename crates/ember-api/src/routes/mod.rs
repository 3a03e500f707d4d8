//! HTTP routing.

pub mod products;
pub mod users;

use crate::error::ApiError;
use crate::state::SharedState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router with all routes and middleware.
pub fn create_router(state: SharedState) -> Router {
    // Permissive CORS: the storefront client runs on its own origin
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(products::routes())
        .merge(users::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
