//! Admin account repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::AdminAccount;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminAccount>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, DomainError>;
    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminAccount>, DomainError>;
    async fn find_all(&self) -> Result<Vec<AdminAccount>, DomainError>;
    async fn create(&self, account: &AdminAccount) -> Result<AdminAccount, DomainError>;
    async fn update(&self, account: &AdminAccount) -> Result<AdminAccount, DomainError>;
    /// Hard delete; admin accounts are physically removed.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
