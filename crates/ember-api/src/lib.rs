//! Product and user REST API for the Ember storefront.
//!
//! An axum service over in-memory repositories. Routes:
//!
//! - `GET /api/products` — paginated listing with keyword search
//! - `GET /api/products/:id`, plus admin create/update/delete
//! - `POST /api/users` / `POST /api/users/login` — register and login
//! - `GET|PUT /api/users/profile` — bearer-authenticated profile

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, SharedState};
