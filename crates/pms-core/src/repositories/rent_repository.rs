//! Rent ledger repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{PaymentSummary, RentRecord};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentRecord>, DomainError>;
    async fn find_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<RentRecord>, DomainError>;
    async fn find_by_tenant_and_month(
        &self,
        tenant_id: &Uuid,
        month: &str,
    ) -> Result<Option<RentRecord>, DomainError>;

    /// Fails with [`DomainError::RentMonthAlreadyExists`] when a row for the
    /// same (tenant, month) already exists.
    async fn create(&self, record: &RentRecord) -> Result<RentRecord, DomainError>;
    async fn update(&self, record: &RentRecord) -> Result<RentRecord, DomainError>;

    /// Hard delete; rent rows carry no soft-delete flag.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;

    async fn list_payments(&self) -> Result<Vec<PaymentSummary>, DomainError>;
}
