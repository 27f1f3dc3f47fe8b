// ============================================================================
// PMS API - Floor Handlers
// File: crates/pms-api/src/handlers/floors.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use pms_core::domain::{Floor, FloorType};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFloorRequest {
    pub property_id: Uuid,
    pub floor_number: i32,
    pub floor_name: Option<String>,
    #[serde(default)]
    pub floor_type: FloorType,
    pub total_units: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFloorRequest {
    pub floor_number: Option<i32>,
    pub floor_name: Option<String>,
    pub floor_type: Option<FloorType>,
    pub total_units: Option<i32>,
    pub is_active: Option<bool>,
}

/// POST /api/floors
pub async fn create_floor(
    State(state): State<AppState>,
    Json(payload): Json<CreateFloorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Floor>>), ApiError> {
    // Parent property must be live.
    state
        .properties
        .find_by_id(&payload.property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    let floor = Floor {
        id: Uuid::new_v4(),
        property_id: payload.property_id,
        floor_number: payload.floor_number,
        floor_name: payload.floor_name,
        floor_type: payload.floor_type,
        total_units: payload.total_units,
        is_active: true,
        is_deleted: false,
        created_at: Utc::now(),
        modified_at: None,
    };

    let created = state.floors.create(&floor).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /api/floors
pub async fn list_floors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Floor>>>, ApiError> {
    let floors = state.floors.find_all().await?;
    Ok(Json(ApiResponse::list(floors)))
}

/// GET /api/floors/{id}
pub async fn get_floor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Floor>>, ApiError> {
    let floor = state
        .floors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Floor not found".to_string()))?;
    Ok(Json(ApiResponse::success(floor)))
}

/// GET /api/floors/property/{propertyId}
pub async fn floors_by_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Floor>>>, ApiError> {
    let floors = state.floors.find_by_property(&property_id).await?;
    Ok(Json(ApiResponse::list(floors)))
}

/// PUT /api/floors/{id}
pub async fn update_floor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFloorRequest>,
) -> Result<Json<ApiResponse<Floor>>, ApiError> {
    let mut floor = state
        .floors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Floor not found".to_string()))?;

    if let Some(floor_number) = payload.floor_number {
        floor.floor_number = floor_number;
    }
    if let Some(floor_name) = payload.floor_name {
        floor.floor_name = Some(floor_name);
    }
    if let Some(floor_type) = payload.floor_type {
        floor.floor_type = floor_type;
    }
    if let Some(total_units) = payload.total_units {
        floor.total_units = Some(total_units);
    }
    if let Some(is_active) = payload.is_active {
        floor.is_active = is_active;
    }

    let updated = state.floors.update(&floor).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/floors/{id} (soft delete)
pub async fn delete_floor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.floors.soft_delete(&id).await?;
    Ok(Json(ApiResponse::message("Floor deleted successfully")))
}
