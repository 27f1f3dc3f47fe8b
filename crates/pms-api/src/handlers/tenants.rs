// ============================================================================
// PMS API - Tenant Handlers
// File: crates/pms-api/src/handlers/tenants.rs
// ============================================================================
//! Tenant onboarding and vacating go through the lifecycle service; plain
//! reads and attribute updates hit the repository directly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use pms_core::domain::{Gender, IdType, Tenant, TenantStatus};
use pms_security::Claims;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    /// Operator-assigned code, `TEN-0001` style.
    #[serde(rename = "tenantId")]
    #[validate(length(min = 1, message = "Tenant ID is required"))]
    pub tenant_code: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub full_name: Option<String>,
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

    pub unit_id: Uuid,
    pub lease_start_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    pub mobile_number: Option<String>,
    pub alternate_phone: Option<String>,
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
    pub lease_start_date: Option<NaiveDate>,
}

/// POST /api/tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Tenant>>), ApiError> {
    payload.validate()?;

    let full_name = payload
        .full_name
        .unwrap_or_else(|| format!("{} {}", payload.first_name, payload.last_name));

    let tenant = Tenant {
        id: Uuid::new_v4(),
        tenant_code: payload.tenant_code,
        first_name: payload.first_name,
        last_name: payload.last_name,
        full_name,
        gender: payload.gender,
        mobile_number: payload.mobile_number,
        alternate_phone: payload.alternate_phone,
        email: payload.email,
        id_type: payload.id_type,
        id_number: payload.id_number,
        id_document: payload.id_document,
        address_line1: payload.address_line1,
        address_line2: payload.address_line2,
        city: payload.city,
        state: payload.state,
        country: payload.country,
        pincode: payload.pincode,
        unit_id: Some(payload.unit_id),
        status: TenantStatus::Active,
        lease_start_date: payload.lease_start_date,
        is_deleted: false,
        created_by: claims.account_id(),
        created_at: Utc::now(),
        modified_at: None,
    };

    let created = state.lifecycle.onboard_tenant(tenant).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            created,
            "Tenant created successfully",
        )),
    ))
}

/// GET /api/tenants
pub async fn list_tenants(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Tenant>>>, ApiError> {
    let tenants = state.tenants.find_all().await?;
    Ok(Json(ApiResponse::list(tenants)))
}

/// GET /api/tenants/{id}
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    let tenant = state
        .tenants
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tenant not found".to_string()))?;
    Ok(Json(ApiResponse::success(tenant)))
}

/// PUT /api/tenants/{id}
///
/// Attribute updates only; status and the unit reference belong to the
/// lifecycle operations.
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTenantRequest>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    let mut tenant = state
        .tenants
        .find_by_id(&id)
        .await?
        .filter(|t| !t.is_deleted)
        .ok_or_else(|| ApiError::NotFound("Tenant not found or already deleted".to_string()))?;

    if let Some(first_name) = payload.first_name {
        tenant.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        tenant.last_name = last_name;
    }
    if let Some(full_name) = payload.full_name {
        tenant.full_name = full_name;
    }
    if let Some(gender) = payload.gender {
        tenant.gender = Some(gender);
    }
    if let Some(mobile_number) = payload.mobile_number {
        tenant.mobile_number = mobile_number;
    }
    if let Some(alternate_phone) = payload.alternate_phone {
        tenant.alternate_phone = Some(alternate_phone);
    }
    if let Some(email) = payload.email {
        tenant.email = Some(email);
    }
    if let Some(id_type) = payload.id_type {
        tenant.id_type = Some(id_type);
    }
    if let Some(id_number) = payload.id_number {
        tenant.id_number = Some(id_number);
    }
    if let Some(id_document) = payload.id_document {
        tenant.id_document = Some(id_document);
    }
    if let Some(address_line1) = payload.address_line1 {
        tenant.address_line1 = Some(address_line1);
    }
    if let Some(address_line2) = payload.address_line2 {
        tenant.address_line2 = Some(address_line2);
    }
    if let Some(city) = payload.city {
        tenant.city = Some(city);
    }
    if let Some(state_name) = payload.state {
        tenant.state = Some(state_name);
    }
    if let Some(country) = payload.country {
        tenant.country = Some(country);
    }
    if let Some(pincode) = payload.pincode {
        tenant.pincode = Some(pincode);
    }
    if let Some(lease_start_date) = payload.lease_start_date {
        tenant.lease_start_date = Some(lease_start_date);
    }
    tenant.validate()?;

    let updated = state.tenants.update(&tenant).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Tenant updated successfully",
    )))
}

/// DELETE /api/tenants/{id} — vacate
pub async fn vacate_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    let vacated = state.lifecycle.vacate_tenant(&id).await?;
    Ok(Json(ApiResponse::success_with_message(
        vacated,
        "Tenant deleted successfully",
    )))
}
