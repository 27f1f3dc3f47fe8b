//! Bearer-token middleware
//!
//! `require_auth` validates the JWT and stores the claims in request
//! extensions; `require_admin` additionally gates on the admin role.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use pms_security::Claims;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))?;

    let claims = state
        .jwt
        .validate_token(token)
        .map_err(|_| ApiError::Unauthorized("Not authorized, token failed".to_string()))?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".to_string()))?;

    if claims.role != "admin" {
        return Err(ApiError::Forbidden(format!(
            "Role '{}' is not allowed to access this resource",
            claims.role
        )));
    }

    Ok(next.run(req).await)
}
