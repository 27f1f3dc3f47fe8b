//! Property domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnershipType {
    #[default]
    Owned,
    Leased,
    Managed,
    Other,
}

impl OwnershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Leased => "Leased",
            Self::Managed => "Managed",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Owned" => Some(Self::Owned),
            "Leased" => Some(Self::Leased),
            "Managed" => Some(Self::Managed),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PropertyStatus {
    #[default]
    Active,
    Inactive,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub area: Option<String>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub landmark: Option<String>,
    pub pincode: Option<String>,
}

/// Top of the catalog hierarchy (property -> floor -> unit).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    /// Human-facing running code, `PROP-00001` style.
    pub property_code: String,

    #[validate(length(min = 1, message = "Property name is required"))]
    pub property_name: String,
    #[validate(length(min = 1, message = "Property type is required"))]
    pub property_type: String,
    pub ownership_type: OwnershipType,
    pub description: Option<String>,

    #[validate(nested)]
    pub location: Location,

    pub property_status: PropertyStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.property_status = PropertyStatus::Inactive;
        self.modified_at = Some(Utc::now());
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_delete_marks_inactive() {
        let mut property = Property {
            id: Uuid::new_v4(),
            property_code: "PROP-00001".into(),
            property_name: "Sunrise Residency".into(),
            property_type: "Apartment".into(),
            ownership_type: OwnershipType::Owned,
            description: None,
            location: Location {
                country: "India".into(),
                state: "Maharashtra".into(),
                city: "Pune".into(),
                area: None,
                address: "12 MG Road".into(),
                landmark: None,
                pincode: Some("411001".into()),
            },
            property_status: PropertyStatus::Active,
            is_deleted: false,
            created_at: Utc::now(),
            modified_at: None,
        };

        property.soft_delete();
        assert!(property.is_deleted);
        assert_eq!(property.property_status, PropertyStatus::Inactive);
        assert!(property.modified_at.is_some());
    }
}
