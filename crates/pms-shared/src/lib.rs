//! # PMS Shared
//!
//! Shared utilities, configuration, and telemetry for the
//! property-management service.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use error::AppError;
