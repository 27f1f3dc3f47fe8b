//! Domain services (business logic)

pub mod auth_service;
pub mod lifecycle_service;

pub use auth_service::{AuthResult, AuthService};
pub use lifecycle_service::{LifecycleService, NewRentEntry, ReceiptData, RentUpdate};
