//! Labor (maintenance staff) entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::tenant::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdProofType {
    Aadhaar,
    #[serde(rename = "Voter ID")]
    VoterId,
    #[serde(rename = "Driving License")]
    DrivingLicense,
}

impl IdProofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::VoterId => "Voter ID",
            Self::DrivingLicense => "Driving License",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Aadhaar" => Some(Self::Aadhaar),
            "Voter ID" => Some(Self::VoterId),
            "Driving License" => Some(Self::DrivingLicense),
            _ => None,
        }
    }
}

/// Registered maintenance worker. Uses `is_active` as its removal flag.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Labor {
    pub id: Uuid,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
    pub alternate_number: Option<String>,

    pub gender: Gender,
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: i32,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    pub id_proof_type: IdProofType,
    #[validate(length(min = 1, message = "ID proof number is required"))]
    pub id_proof_number: String,
    pub profile_image: Option<String>,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Labor {
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.modified_at = Some(Utc::now());
    }
}
