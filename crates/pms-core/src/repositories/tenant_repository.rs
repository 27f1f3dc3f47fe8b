//! Tenant repository trait (port)
//!
//! `onboard` and `vacate` are the two multi-entity writes of the lifecycle
//! engine; an adapter must make each atomic (the unit flip and the tenant
//! write commit or fail together).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Tenant;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Resolves vacated tenants too; `find_all` lists only live ones.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError>;
    async fn find_by_code(&self, tenant_code: &str) -> Result<Option<Tenant>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError>;
    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;

    /// Persist the tenant and flip its unit Available -> Occupied in one
    /// transaction. Fails with [`DomainError::UnitNotAvailable`] if the unit
    /// was taken concurrently.
    async fn onboard(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;

    /// Mark the tenant Vacated, clear its unit reference, and flip the unit
    /// back to Available (the flip is the final step) in one transaction.
    async fn vacate(&self, id: &Uuid) -> Result<Tenant, DomainError>;
}
