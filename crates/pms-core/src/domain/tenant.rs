//! Tenant domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TenantStatus {
    #[default]
    Active,
    Vacated,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Vacated => "Vacated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Vacated" => Some(Self::Vacated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdType {
    Aadhaar,
    Passport,
    #[serde(rename = "Driving License")]
    DrivingLicense,
    #[serde(rename = "Voter ID")]
    VoterId,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::Passport => "Passport",
            Self::DrivingLicense => "Driving License",
            Self::VoterId => "Voter ID",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Aadhaar" => Some(Self::Aadhaar),
            "Passport" => Some(Self::Passport),
            "Driving License" => Some(Self::DrivingLicense),
            "Voter ID" => Some(Self::VoterId),
            _ => None,
        }
    }
}

/// A lease occupant.
///
/// A tenant references exactly one unit while Active; vacating clears the
/// reference and soft-deletes the record. Tenants are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,

    #[validate(length(min = 1, message = "Tenant ID is required"))]
    pub tenant_code: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    pub gender: Option<Gender>,

    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
    pub alternate_phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,

    pub id_type: Option<IdType>,
    pub id_number: Option<String>,
    pub id_document: Option<String>,

    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,

    pub unit_id: Option<Uuid>,
    pub status: TenantStatus,
    pub lease_start_date: Option<NaiveDate>,

    pub is_deleted: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Tenant {
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }

    pub fn is_vacated(&self) -> bool {
        self.status == TenantStatus::Vacated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_catches_blank_code() {
        let tenant = Tenant {
            id: Uuid::new_v4(),
            tenant_code: String::new(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            full_name: "Asha Rao".into(),
            gender: None,
            mobile_number: "9000000001".into(),
            alternate_phone: None,
            email: None,
            id_type: None,
            id_number: None,
            id_document: None,
            address_line1: None,
            address_line2: None,
            city: None,
            state: None,
            country: None,
            pincode: None,
            unit_id: Some(Uuid::new_v4()),
            status: TenantStatus::Active,
            lease_start_date: None,
            is_deleted: false,
            created_by: None,
            created_at: Utc::now(),
            modified_at: None,
        };
        assert!(tenant.validate().is_err());
    }
}
