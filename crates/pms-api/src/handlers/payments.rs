// ============================================================================
// PMS API - Payments Overview Handler
// File: crates/pms-api/src/handlers/payments.rs
// ============================================================================

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use pms_core::domain::{PaymentStatus, PaymentSummary};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Sentinel for broken or soft-deleted references.
const MISSING: &str = "—";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: Uuid,
    pub tenant_name: String,
    pub property_name: String,
    pub unit_number: String,
    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub total_amount: i64,
    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,
}

impl From<PaymentSummary> for PaymentDto {
    fn from(summary: PaymentSummary) -> Self {
        PaymentDto {
            id: summary.id,
            tenant_name: summary.tenant_name.unwrap_or_else(|| MISSING.to_string()),
            property_name: summary.property_name.unwrap_or_else(|| MISSING.to_string()),
            unit_number: summary.unit_number.unwrap_or_else(|| MISSING.to_string()),
            month: summary.month,
            rent_amount: summary.rent_amount,
            maintenance_amount: summary.maintenance_amount,
            total_amount: summary.total_amount,
            payment_status: summary.payment_status,
            paid_on: summary.paid_on,
        }
    }
}

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PaymentDto>>>, ApiError> {
    let payments = state.rents.list_payments().await?;
    let payments: Vec<PaymentDto> = payments.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(payments)))
}
