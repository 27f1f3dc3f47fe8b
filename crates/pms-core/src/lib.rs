//! # PMS Core
//!
//! Domain entities, repository traits, and the tenant-unit-rent lifecycle
//! engine for the property-management service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
