//! Skycast HTTP presentation layer
//!
//! This crate provides the HTTP API for Skycast: the provider pass-through,
//! the normalized dashboard, city search and health probes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use state::AppState;
