//! Labor repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Labor;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaborRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Labor>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Labor>, DomainError>;
    async fn create(&self, labor: &Labor) -> Result<Labor, DomainError>;
    async fn update(&self, labor: &Labor) -> Result<Labor, DomainError>;
    async fn deactivate(&self, id: &Uuid) -> Result<(), DomainError>;
}
