//! Tenki HTTP presentation layer
//!
//! Serves the forecast page, health checks and static assets, and owns the
//! listener loop with its bounded shutdown.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
