// ============================================================================
// PMS API - Property Handlers
// File: crates/pms-api/src/handlers/properties.rs
// ============================================================================

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use pms_core::domain::{Location, OwnershipType, Property, PropertyStatus};
use pms_core::repositories::PropertyFilter;
use pms_shared::utils::property_code;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, message = "Property name is required"))]
    pub property_name: String,
    #[validate(length(min = 1, message = "Property type is required"))]
    pub property_type: String,
    #[serde(default)]
    pub ownership_type: OwnershipType,
    pub description: Option<String>,
    #[validate(nested)]
    pub location: Location,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    pub property_name: Option<String>,
    pub property_type: Option<String>,
    pub ownership_type: Option<OwnershipType>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub property_status: Option<PropertyStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListQuery {
    pub property_type: Option<String>,
    pub property_status: Option<String>,
    pub city: Option<String>,
}

/// POST /api/properties
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Property>>), ApiError> {
    payload.validate()?;

    let count = state.properties.count().await?;
    let property = Property {
        id: Uuid::new_v4(),
        property_code: property_code(count),
        property_name: payload.property_name,
        property_type: payload.property_type,
        ownership_type: payload.ownership_type,
        description: payload.description,
        location: payload.location,
        property_status: PropertyStatus::Active,
        is_deleted: false,
        created_at: Utc::now(),
        modified_at: None,
    };

    let created = state.properties.create(&property).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            created,
            "Property created successfully",
        )),
    ))
}

/// GET /api/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertyListQuery>,
) -> Result<Json<ApiResponse<Vec<Property>>>, ApiError> {
    let filter = PropertyFilter {
        property_type: query.property_type,
        property_status: query.property_status,
        city: query.city,
    };
    let properties = state.properties.find_all(&filter).await?;
    Ok(Json(ApiResponse::list(properties)))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state
        .properties
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
    Ok(Json(ApiResponse::success(property)))
}

/// PUT /api/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let mut property = state
        .properties
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    if let Some(property_name) = payload.property_name {
        property.property_name = property_name;
    }
    if let Some(property_type) = payload.property_type {
        property.property_type = property_type;
    }
    if let Some(ownership_type) = payload.ownership_type {
        property.ownership_type = ownership_type;
    }
    if let Some(description) = payload.description {
        property.description = Some(description);
    }
    if let Some(location) = payload.location {
        property.location = location;
    }
    if let Some(property_status) = payload.property_status {
        property.property_status = property_status;
    }
    property.validate()?;

    let updated = state.properties.update(&property).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Property updated successfully",
    )))
}

/// DELETE /api/properties/{id} (soft delete)
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.properties.soft_delete(&id).await?;
    Ok(Json(ApiResponse::message("Property deleted successfully")))
}
