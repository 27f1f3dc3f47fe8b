use std::sync::Arc;

use pms_core::repositories::{
    AdminRepository, FloorRepository, LaborRepository, PropertyRepository, RentRepository,
    TenantRepository, UnitRepository,
};
use pms_core::services::{AuthService, LifecycleService};
use pms_security::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtService>,
    pub auth: Arc<AuthService>,
    pub lifecycle: Arc<LifecycleService>,
    pub properties: Arc<dyn PropertyRepository>,
    pub floors: Arc<dyn FloorRepository>,
    pub units: Arc<dyn UnitRepository>,
    pub tenants: Arc<dyn TenantRepository>,
    pub rents: Arc<dyn RentRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub labors: Arc<dyn LaborRepository>,
}
