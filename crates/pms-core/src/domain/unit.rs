//! Unit domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Self::Available),
            "Occupied" => Some(Self::Occupied),
            "Reserved" => Some(Self::Reserved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnitType {
    #[default]
    Flat,
    Studio,
    Duplex,
    Penthouse,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Studio => "Studio",
            Self::Duplex => "Duplex",
            Self::Penthouse => "Penthouse",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Flat" => Some(Self::Flat),
            "Studio" => Some(Self::Studio),
            "Duplex" => Some(Self::Duplex),
            "Penthouse" => Some(Self::Penthouse),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FurnishingStatus {
    #[default]
    Unfurnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    #[serde(rename = "Fully-Furnished")]
    FullyFurnished,
}

impl FurnishingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::FullyFurnished => "Fully-Furnished",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Unfurnished" => Some(Self::Unfurnished),
            "Semi-Furnished" => Some(Self::SemiFurnished),
            "Fully-Furnished" => Some(Self::FullyFurnished),
            _ => None,
        }
    }
}

/// A single rentable space on a floor within a property.
///
/// `availability_status` is owned exclusively by this entity; the lifecycle
/// engine flips it when a tenant is onboarded or vacated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Uuid,
    pub property_id: Uuid,
    pub floor_id: Uuid,

    #[validate(length(min = 1, message = "Unit number is required"))]
    pub unit_number: String,
    pub unit_type: UnitType,

    pub square_feet: i64,
    pub square_meters: i64,
    pub square_rate: i64,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub balconies: Option<i32>,

    #[validate(range(min = 0, message = "Rent amount cannot be negative"))]
    pub rent_amount: i64,
    pub security_deposit: Option<i64>,
    #[validate(range(min = 0, message = "Maintenance charge cannot be negative"))]
    pub maintenance_charge: i64,

    pub availability_status: AvailabilityStatus,
    pub furnishing_status: FurnishingStatus,
    pub parking_available: bool,

    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Unit {
    pub fn is_available(&self) -> bool {
        !self.is_deleted && self.availability_status == AvailabilityStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_unit() -> Unit {
        Unit {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            floor_id: Uuid::new_v4(),
            unit_number: "A-101".to_string(),
            unit_type: UnitType::Flat,
            square_feet: 900,
            square_meters: 84,
            square_rate: 55,
            bedrooms: Some(2),
            bathrooms: Some(2),
            balconies: Some(1),
            rent_amount: 10_000,
            security_deposit: Some(20_000),
            maintenance_charge: 500,
            availability_status: AvailabilityStatus::Available,
            furnishing_status: FurnishingStatus::Unfurnished,
            parking_available: false,
            is_deleted: false,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    #[test]
    fn test_availability() {
        let mut unit = sample_unit();
        assert!(unit.is_available());

        unit.availability_status = AvailabilityStatus::Occupied;
        assert!(!unit.is_available());

        unit.availability_status = AvailabilityStatus::Available;
        unit.is_deleted = true;
        assert!(!unit.is_available());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["Available", "Occupied", "Reserved"] {
            assert_eq!(AvailabilityStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(AvailabilityStatus::from_str("Vacant").is_none());
    }
}
