//! Floor repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Floor;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FloorRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Floor>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Floor>, DomainError>;
    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Floor>, DomainError>;
    async fn create(&self, floor: &Floor) -> Result<Floor, DomainError>;
    async fn update(&self, floor: &Floor) -> Result<Floor, DomainError>;
    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
