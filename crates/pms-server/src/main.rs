use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use pms_api::{build_router, AppState};
use pms_core::services::{AuthService, LifecycleService};
use pms_infrastructure::{
    create_pool, PgAdminRepository, PgFloorRepository, PgLaborRepository, PgPropertyRepository,
    PgRentRepository, PgTenantRepository, PgUnitRepository, SmtpMailer,
};
use pms_security::JwtService;
use pms_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    pms_shared::telemetry::init_telemetry();

    info!("PMS Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    info!("Connecting to database...");
    let pool = create_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established.");

    // Repositories (adapters)
    let properties = Arc::new(PgPropertyRepository::new(pool.clone()));
    let floors = Arc::new(PgFloorRepository::new(pool.clone()));
    let units = Arc::new(PgUnitRepository::new(pool.clone()));
    let tenants = Arc::new(PgTenantRepository::new(pool.clone()));
    let rents = Arc::new(PgRentRepository::new(pool.clone()));
    let admins = Arc::new(PgAdminRepository::new(pool.clone()));
    let labors = Arc::new(PgLaborRepository::new(pool));

    // Mailer
    let mailer = Arc::new(SmtpMailer::new(&config.mail).map_err(|e| {
        error!("Failed to build SMTP transport: {}", e);
        anyhow::anyhow!("{e}")
    })?);

    // Services
    let jwt = Arc::new(JwtService::new(
        config.jwt.secret.clone(),
        config.jwt.token_expiry,
    ));
    let auth = Arc::new(AuthService::new(
        admins.clone(),
        mailer,
        jwt.clone(),
        config.mail.reset_url_base.clone(),
    ));
    let lifecycle = Arc::new(LifecycleService::new(
        tenants.clone(),
        units.clone(),
        rents.clone(),
    ));

    let state = AppState {
        jwt,
        auth,
        lifecycle,
        properties,
        floors,
        units,
        tenants,
        rents,
        admins,
        labors,
    };

    // Build router
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
