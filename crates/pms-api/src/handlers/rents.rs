// ============================================================================
// PMS API - Rent Ledger Handlers
// File: crates/pms-api/src/handlers/rents.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use pms_core::domain::{PaymentStatus, RentRecord};
use pms_core::services::{NewRentEntry, RentUpdate};

use crate::error::ApiError;
use crate::pdf::receipt::render_receipt;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRentRequest {
    pub month: String,
    pub rent_amount: i64,
    #[serde(default)]
    pub maintenance_amount: i64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentRequest {
    pub rent_amount: Option<i64>,
    pub maintenance_amount: Option<i64>,
    pub payment_status: Option<PaymentStatus>,
    pub paid_on: Option<NaiveDate>,
}

/// POST /api/tenants/{tenantId}/rents
pub async fn add_rent(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<AddRentRequest>,
) -> Result<Json<ApiResponse<RentRecord>>, ApiError> {
    let record = state
        .lifecycle
        .add_monthly_rent(
            &tenant_id,
            NewRentEntry {
                month: payload.month,
                rent_amount: payload.rent_amount,
                maintenance_amount: payload.maintenance_amount,
                payment_status: payload.payment_status,
                paid_on: payload.paid_on,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success(record)))
}

/// GET /api/tenants/{tenantId}/rents
pub async fn rent_history(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RentRecord>>>, ApiError> {
    let records = state.lifecycle.rent_history(&tenant_id).await?;
    Ok(Json(ApiResponse::list(records)))
}

/// PUT /api/tenants/rents/{rentId}
pub async fn update_rent(
    State(state): State<AppState>,
    Path(rent_id): Path<Uuid>,
    Json(payload): Json<UpdateRentRequest>,
) -> Result<Json<ApiResponse<RentRecord>>, ApiError> {
    let record = state
        .lifecycle
        .update_rent(
            &rent_id,
            RentUpdate {
                rent_amount: payload.rent_amount,
                maintenance_amount: payload.maintenance_amount,
                payment_status: payload.payment_status,
                paid_on: payload.paid_on,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success(record)))
}

/// DELETE /api/tenants/rents/{rentId}
pub async fn delete_rent(
    State(state): State<AppState>,
    Path(rent_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.lifecycle.delete_rent(&rent_id).await?;
    Ok(Json(ApiResponse::message("Rent record deleted successfully")))
}

/// GET /api/tenants/rents/{rentId}/receipt
///
/// Streams a PDF; fails before any byte is produced unless the record is
/// Paid.
pub async fn rent_receipt(
    State(state): State<AppState>,
    Path(rent_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let data = state.lifecycle.receipt_data(&rent_id).await?;
    let bytes =
        render_receipt(&data).map_err(|e| ApiError::InternalError(e.to_string()))?;

    let filename = format!("Receipt-{}-{}.pdf", data.rent.month, data.tenant.full_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response())
}
