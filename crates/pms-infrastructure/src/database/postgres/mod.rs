//! PostgreSQL repository implementations

pub mod admin_repo_impl;
pub mod floor_repo_impl;
pub mod labor_repo_impl;
pub mod property_repo_impl;
pub mod rent_repo_impl;
pub mod tenant_repo_impl;
pub mod unit_repo_impl;

pub use admin_repo_impl::PgAdminRepository;
pub use floor_repo_impl::PgFloorRepository;
pub use labor_repo_impl::PgLaborRepository;
pub use property_repo_impl::PgPropertyRepository;
pub use rent_repo_impl::PgRentRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use unit_repo_impl::PgUnitRepository;
