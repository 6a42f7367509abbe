//! Dashboard HTTP API
//! Serves every dataset as JSON in a common response envelope

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
