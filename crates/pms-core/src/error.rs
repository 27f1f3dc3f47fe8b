//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Property not found")]
    PropertyNotFound,

    #[error("Floor not found")]
    FloorNotFound,

    #[error("Unit not found")]
    UnitNotFound,

    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Rent record not found")]
    RentRecordNotFound,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Labor not found")]
    LaborNotFound,

    #[error("Unit is not available")]
    UnitNotAvailable,

    #[error("Tenant already exists with this Tenant ID")]
    TenantCodeAlreadyExists,

    #[error("Rent for {0} already recorded for this tenant")]
    RentMonthAlreadyExists(String),

    #[error("Unit number already exists on this floor: {0}")]
    UnitNumberAlreadyExists(String),

    #[error("User already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Labor ID proof number already registered: {0}")]
    IdProofAlreadyExists(String),

    #[error("Tenant has no active unit")]
    TenantWithoutUnit,

    #[error("Receipt is available only for paid rent")]
    ReceiptNotEligible,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Reset token is invalid or expired")]
    InvalidResetToken,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Mail delivery error: {0}")]
    MailError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
