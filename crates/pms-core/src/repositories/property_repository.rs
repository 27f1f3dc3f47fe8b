//! Property repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Property;
use crate::error::DomainError;

/// Optional list filters, matching the query parameters of the listing
/// endpoint.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub property_type: Option<String>,
    pub property_status: Option<String>,
    pub city: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError>;
    async fn find_all(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError>;
    /// Total rows ever created, used to mint the next property code.
    async fn count(&self) -> Result<i64, DomainError>;
    async fn create(&self, property: &Property) -> Result<Property, DomainError>;
    async fn update(&self, property: &Property) -> Result<Property, DomainError>;
    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
