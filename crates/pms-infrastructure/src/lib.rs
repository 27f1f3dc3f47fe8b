//! # PMS Infrastructure
//!
//! PostgreSQL and SMTP adapters behind the core ports.

pub mod database;
pub mod mail;

pub use database::{
    create_pool, PgAdminRepository, PgFloorRepository, PgLaborRepository, PgPropertyRepository,
    PgRentRepository, PgTenantRepository, PgUnitRepository,
};
pub use mail::SmtpMailer;
