// ABOUTME: HTTP server for grocerd, exposing the grocery list read and replace API over axum.
// ABOUTME: Wires routes, shared state, Basic auth middleware, and env-based configuration.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use auth::BasicAuthLayer;
pub use config::{ConfigError, GrocerdConfig, load_credentials};
pub use routes::create_router;
