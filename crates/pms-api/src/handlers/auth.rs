// ============================================================================
// PMS API - Auth Handlers
// File: crates/pms-api/src/handlers/auth.rs
// ============================================================================
//! Credential endpoints: register, login, admin management, password flows.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pms_core::domain::{AdminAccount, AdminRole};
use pms_security::Claims;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AdminAccount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<AdminRole>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// POST /auth/v1/admin/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    let result = state
        .auth
        .register(
            &payload.username,
            &payload.email,
            &payload.password,
            &payload.mobile_number,
            &payload.address,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AuthResponse {
            token: result.token,
            user: result.account,
        })),
    ))
}

/// POST /auth/v1/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let result = state.auth.login(&payload.email, &payload.password).await?;

    Ok(Json(ApiResponse::success(AuthResponse {
        token: result.token,
        user: result.account,
    })))
}

/// GET /auth/v1/admin/admins (admin only)
pub async fn list_admins(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AdminAccount>>>, ApiError> {
    let admins = state.admins.find_all().await?;
    Ok(Json(ApiResponse::list(admins)))
}

/// PUT /auth/v1/admin/admin/{id} (admin only)
pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<Json<ApiResponse<AdminAccount>>, ApiError> {
    let mut account = state
        .admins
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

    if let Some(username) = payload.username {
        account.username = username;
    }
    if let Some(email) = payload.email {
        account.email = email.trim().to_lowercase();
    }
    if let Some(mobile_number) = payload.mobile_number {
        account.mobile_number = mobile_number;
    }
    if let Some(address) = payload.address {
        account.address = address;
    }
    if let Some(role) = payload.role {
        account.role = role;
    }
    account.modified_at = Some(chrono::Utc::now());

    let updated = state.admins.update(&account).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /auth/v1/admin/admin/{id} (admin only)
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.admins.delete(&id).await?;
    Ok(Json(ApiResponse::message("Admin deleted successfully")))
}

/// PUT /auth/v1/admin/change-password (admin only)
pub async fn change_password(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let account_id = claims
        .account_id()
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, token failed".to_string()))?;

    state
        .auth
        .change_password(&account_id, &payload.current_password, &payload.new_password)
        .await?;

    Ok(Json(ApiResponse::message("Password updated successfully")))
}

/// POST /auth/v1/admin/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.auth.forgot_password(&payload.email).await?;
    Ok(Json(ApiResponse::message("Reset email sent")))
}

/// POST /auth/v1/admin/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .auth
        .reset_password(&payload.token, &payload.new_password)
        .await?;
    Ok(Json(ApiResponse::message("Password reset successfully")))
}
