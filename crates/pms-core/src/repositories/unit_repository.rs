//! Unit repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Unit;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Unit>, DomainError>;
    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Unit>, DomainError>;
    async fn create(&self, unit: &Unit) -> Result<Unit, DomainError>;
    async fn update(&self, unit: &Unit) -> Result<Unit, DomainError>;
    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
