// ============================================================================
// PMS API - Unit Handlers
// File: crates/pms-api/src/handlers/units.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use pms_core::domain::{AvailabilityStatus, FurnishingStatus, Unit, UnitType};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitRequest {
    pub property_id: Uuid,
    pub floor_id: Uuid,
    #[validate(length(min = 1, message = "Unit number is required"))]
    pub unit_number: String,
    #[serde(default)]
    pub unit_type: UnitType,
    pub square_feet: i64,
    pub square_meters: i64,
    pub square_rate: i64,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub balconies: Option<i32>,
    #[serde(default)]
    pub rent_amount: i64,
    pub security_deposit: Option<i64>,
    #[serde(default)]
    pub maintenance_charge: i64,
    #[serde(default)]
    pub furnishing_status: FurnishingStatus,
    #[serde(default)]
    pub parking_available: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitRequest {
    pub unit_number: Option<String>,
    pub unit_type: Option<UnitType>,
    pub square_feet: Option<i64>,
    pub square_meters: Option<i64>,
    pub square_rate: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub balconies: Option<i32>,
    pub rent_amount: Option<i64>,
    pub security_deposit: Option<i64>,
    pub maintenance_charge: Option<i64>,
    /// Operators may park a unit as Reserved; occupancy itself is driven by
    /// the tenant lifecycle.
    pub availability_status: Option<AvailabilityStatus>,
    pub furnishing_status: Option<FurnishingStatus>,
    pub parking_available: Option<bool>,
}

/// POST /api/units
pub async fn create_unit(
    State(state): State<AppState>,
    Json(payload): Json<CreateUnitRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Unit>>), ApiError> {
    payload.validate()?;

    state
        .properties
        .find_by_id(&payload.property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
    state
        .floors
        .find_by_id(&payload.floor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Floor not found".to_string()))?;

    let unit = Unit {
        id: Uuid::new_v4(),
        property_id: payload.property_id,
        floor_id: payload.floor_id,
        unit_number: payload.unit_number,
        unit_type: payload.unit_type,
        square_feet: payload.square_feet,
        square_meters: payload.square_meters,
        square_rate: payload.square_rate,
        bedrooms: payload.bedrooms,
        bathrooms: payload.bathrooms,
        balconies: payload.balconies,
        rent_amount: payload.rent_amount,
        security_deposit: payload.security_deposit,
        maintenance_charge: payload.maintenance_charge,
        availability_status: AvailabilityStatus::Available,
        furnishing_status: payload.furnishing_status,
        parking_available: payload.parking_available,
        is_deleted: false,
        created_at: Utc::now(),
        modified_at: None,
    };
    unit.validate()?;

    let created = state.units.create(&unit).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /api/units/property/{propertyId}
pub async fn units_by_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Unit>>>, ApiError> {
    let units = state.units.find_by_property(&property_id).await?;
    Ok(Json(ApiResponse::list(units)))
}

/// PUT /api/units/{unitId}
pub async fn update_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<Uuid>,
    Json(payload): Json<UpdateUnitRequest>,
) -> Result<Json<ApiResponse<Unit>>, ApiError> {
    let mut unit = state
        .units
        .find_by_id(&unit_id)
        .await?
        .filter(|u| !u.is_deleted)
        .ok_or_else(|| ApiError::NotFound("Unit not found".to_string()))?;

    if let Some(unit_number) = payload.unit_number {
        unit.unit_number = unit_number;
    }
    if let Some(unit_type) = payload.unit_type {
        unit.unit_type = unit_type;
    }
    if let Some(square_feet) = payload.square_feet {
        unit.square_feet = square_feet;
    }
    if let Some(square_meters) = payload.square_meters {
        unit.square_meters = square_meters;
    }
    if let Some(square_rate) = payload.square_rate {
        unit.square_rate = square_rate;
    }
    if let Some(bedrooms) = payload.bedrooms {
        unit.bedrooms = Some(bedrooms);
    }
    if let Some(bathrooms) = payload.bathrooms {
        unit.bathrooms = Some(bathrooms);
    }
    if let Some(balconies) = payload.balconies {
        unit.balconies = Some(balconies);
    }
    if let Some(rent_amount) = payload.rent_amount {
        unit.rent_amount = rent_amount;
    }
    if let Some(security_deposit) = payload.security_deposit {
        unit.security_deposit = Some(security_deposit);
    }
    if let Some(maintenance_charge) = payload.maintenance_charge {
        unit.maintenance_charge = maintenance_charge;
    }
    if let Some(availability_status) = payload.availability_status {
        unit.availability_status = availability_status;
    }
    if let Some(furnishing_status) = payload.furnishing_status {
        unit.furnishing_status = furnishing_status;
    }
    if let Some(parking_available) = payload.parking_available {
        unit.parking_available = parking_available;
    }
    unit.validate()?;

    let updated = state.units.update(&unit).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/units/{unitId} (soft delete)
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.units.soft_delete(&unit_id).await?;
    Ok(Json(ApiResponse::message("Unit deleted successfully")))
}
