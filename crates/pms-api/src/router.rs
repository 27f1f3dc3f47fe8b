//! Route table
//!
//! Auth endpoints live under `/auth/v1/admin`; everything else under `/api`
//! behind the bearer-token middleware, with account management additionally
//! gated to the admin role.

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers;
use crate::middleware::auth;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/auth/v1/admin/register", post(handlers::auth::register))
        .route("/auth/v1/admin/login", post(handlers::auth::login))
        .route(
            "/auth/v1/admin/forgot-password",
            post(handlers::auth::forgot_password),
        )
        .route(
            "/auth/v1/admin/reset-password",
            post(handlers::auth::reset_password),
        );

    let admin_routes = Router::new()
        .route("/auth/v1/admin/admins", get(handlers::auth::list_admins))
        .route(
            "/auth/v1/admin/admin/{id}",
            put(handlers::auth::update_admin).delete(handlers::auth::delete_admin),
        )
        .route(
            "/auth/v1/admin/change-password",
            put(handlers::auth::change_password),
        )
        .layer(axum_middleware::from_fn(auth::require_admin));

    let protected_routes = Router::new()
        // Catalog
        .route(
            "/api/properties",
            post(handlers::properties::create_property).get(handlers::properties::list_properties),
        )
        .route(
            "/api/properties/{id}",
            get(handlers::properties::get_property)
                .put(handlers::properties::update_property)
                .delete(handlers::properties::delete_property),
        )
        .route(
            "/api/floors",
            post(handlers::floors::create_floor).get(handlers::floors::list_floors),
        )
        .route(
            "/api/floors/property/{propertyId}",
            get(handlers::floors::floors_by_property),
        )
        .route(
            "/api/floors/{id}",
            get(handlers::floors::get_floor)
                .put(handlers::floors::update_floor)
                .delete(handlers::floors::delete_floor),
        )
        .route("/api/units", post(handlers::units::create_unit))
        .route(
            "/api/units/property/{propertyId}",
            get(handlers::units::units_by_property),
        )
        .route(
            "/api/units/{unitId}",
            put(handlers::units::update_unit).delete(handlers::units::delete_unit),
        )
        // Lifecycle
        .route(
            "/api/tenants",
            post(handlers::tenants::create_tenant).get(handlers::tenants::list_tenants),
        )
        .route(
            "/api/tenants/{id}",
            get(handlers::tenants::get_tenant)
                .put(handlers::tenants::update_tenant)
                .delete(handlers::tenants::vacate_tenant),
        )
        .route(
            "/api/tenants/{id}/rents",
            post(handlers::rents::add_rent).get(handlers::rents::rent_history),
        )
        .route(
            "/api/tenants/rents/{rentId}",
            put(handlers::rents::update_rent).delete(handlers::rents::delete_rent),
        )
        .route(
            "/api/tenants/rents/{rentId}/receipt",
            get(handlers::rents::rent_receipt),
        )
        .route("/api/payments", get(handlers::payments::list_payments))
        // Staff
        .route(
            "/api/labors",
            post(handlers::labors::create_labor).get(handlers::labors::list_labors),
        )
        .route(
            "/api/labors/{id}",
            get(handlers::labors::get_labor)
                .put(handlers::labors::update_labor)
                .delete(handlers::labors::delete_labor),
        )
        .merge(admin_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
