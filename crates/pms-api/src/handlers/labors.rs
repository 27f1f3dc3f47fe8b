// ============================================================================
// PMS API - Labor Handlers
// File: crates/pms-api/src/handlers/labors.rs
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

use pms_core::domain::{Gender, IdProofType, Labor};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLaborRequest {
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
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLaborRequest {
    pub full_name: Option<String>,
    pub mobile_number: Option<String>,
    pub alternate_number: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub id_proof_type: Option<IdProofType>,
    pub id_proof_number: Option<String>,
    pub profile_image: Option<String>,
}

/// POST /api/labors
pub async fn create_labor(
    State(state): State<AppState>,
    Json(payload): Json<CreateLaborRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Labor>>), ApiError> {
    payload.validate()?;

    let labor = Labor {
        id: Uuid::new_v4(),
        full_name: payload.full_name,
        mobile_number: payload.mobile_number,
        alternate_number: payload.alternate_number,
        gender: payload.gender,
        age: payload.age,
        address: payload.address,
        city: payload.city,
        id_proof_type: payload.id_proof_type,
        id_proof_number: payload.id_proof_number,
        profile_image: payload.profile_image,
        is_active: true,
        created_at: Utc::now(),
        modified_at: None,
    };

    let created = state.labors.create(&labor).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            created,
            "Labor registered successfully",
        )),
    ))
}

/// GET /api/labors
pub async fn list_labors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Labor>>>, ApiError> {
    let labors = state.labors.find_all().await?;
    Ok(Json(ApiResponse::list(labors)))
}

/// GET /api/labors/{id}
pub async fn get_labor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Labor>>, ApiError> {
    let labor = state
        .labors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Labor not found".to_string()))?;
    Ok(Json(ApiResponse::success(labor)))
}

/// PUT /api/labors/{id}
pub async fn update_labor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLaborRequest>,
) -> Result<Json<ApiResponse<Labor>>, ApiError> {
    let mut labor = state
        .labors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Labor not found".to_string()))?;

    if let Some(full_name) = payload.full_name {
        labor.full_name = full_name;
    }
    if let Some(mobile_number) = payload.mobile_number {
        labor.mobile_number = mobile_number;
    }
    if let Some(alternate_number) = payload.alternate_number {
        labor.alternate_number = Some(alternate_number);
    }
    if let Some(gender) = payload.gender {
        labor.gender = gender;
    }
    if let Some(age) = payload.age {
        labor.age = age;
    }
    if let Some(address) = payload.address {
        labor.address = address;
    }
    if let Some(city) = payload.city {
        labor.city = city;
    }
    if let Some(id_proof_type) = payload.id_proof_type {
        labor.id_proof_type = id_proof_type;
    }
    if let Some(id_proof_number) = payload.id_proof_number {
        labor.id_proof_number = id_proof_number;
    }
    if let Some(profile_image) = payload.profile_image {
        labor.profile_image = Some(profile_image);
    }
    labor.validate()?;

    let updated = state.labors.update(&labor).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Labor updated successfully",
    )))
}

/// DELETE /api/labors/{id}
pub async fn delete_labor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.labors.deactivate(&id).await?;
    Ok(Json(ApiResponse::message("Labor deleted successfully")))
}
