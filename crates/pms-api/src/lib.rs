//! # PMS API
//!
//! HTTP handlers, middleware, response envelope, and the receipt renderer.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pdf;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use router::build_router;
pub use state::AppState;
