//! # PMS Core - Domain Module
//!
//! Domain entities for the property-management service.

pub mod admin_account;
pub mod floor;
pub mod labor;
pub mod property;
pub mod rent_record;
pub mod tenant;
pub mod unit;

// Re-export all entities and enums
pub use admin_account::{AdminAccount, AdminRole};
pub use floor::{Floor, FloorType};
pub use labor::{IdProofType, Labor};
pub use property::{Location, OwnershipType, Property, PropertyStatus};
pub use rent_record::{is_valid_month, PaymentStatus, PaymentSummary, RentRecord};
pub use tenant::{Gender, IdType, Tenant, TenantStatus};
pub use unit::{AvailabilityStatus, FurnishingStatus, Unit, UnitType};
