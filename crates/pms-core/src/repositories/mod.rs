//! Repository traits (ports)

pub mod admin_repository;
pub mod floor_repository;
pub mod labor_repository;
pub mod notification;
pub mod property_repository;
pub mod rent_repository;
pub mod tenant_repository;
pub mod unit_repository;

pub use admin_repository::AdminRepository;
pub use floor_repository::FloorRepository;
pub use labor_repository::LaborRepository;
pub use notification::NotificationSender;
pub use property_repository::{PropertyFilter, PropertyRepository};
pub use rent_repository::RentRepository;
pub use tenant_repository::TenantRepository;
pub use unit_repository::UnitRepository;
