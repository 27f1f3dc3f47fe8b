//! Floor domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FloorType {
    #[default]
    Residential,
    Commercial,
    Mixed,
}

impl FloorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Mixed => "Mixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Residential" => Some(Self::Residential),
            "Commercial" => Some(Self::Commercial),
            "Mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: Uuid,
    pub property_id: Uuid,

    /// 0 = ground floor.
    pub floor_number: i32,
    pub floor_name: Option<String>,
    pub floor_type: FloorType,
    pub total_units: Option<i32>,

    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Floor {
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.is_active = false;
        self.modified_at = Some(Utc::now());
    }
}
