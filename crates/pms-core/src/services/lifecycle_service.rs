// ============================================================================
// PMS Core - Tenant-Unit-Rent Lifecycle Service
// File: crates/pms-core/src/services/lifecycle_service.rs
// ============================================================================
//! The lifecycle engine: keeps a unit's occupancy flag, a tenant's
//! active/vacated status, and the monthly rent ledger mutually consistent.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    AvailabilityStatus, PaymentStatus, RentRecord, Tenant, Unit,
};
use crate::error::DomainError;
use crate::repositories::{RentRepository, TenantRepository, UnitRepository};

/// Input for one month's ledger entry.
#[derive(Debug, Clone)]
pub struct NewRentEntry {
    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,
}

/// Partial update of a ledger entry; absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct RentUpdate {
    pub rent_amount: Option<i64>,
    pub maintenance_amount: Option<i64>,
    pub payment_status: Option<PaymentStatus>,
    pub paid_on: Option<NaiveDate>,
}

/// Everything the receipt renderer needs. The unit is optional: history
/// outlives the catalog, so a deleted unit renders as a placeholder.
#[derive(Debug, Clone)]
pub struct ReceiptData {
    pub rent: RentRecord,
    pub tenant: Tenant,
    pub unit: Option<Unit>,
}

pub struct LifecycleService {
    tenants: Arc<dyn TenantRepository>,
    units: Arc<dyn UnitRepository>,
    rents: Arc<dyn RentRepository>,
}

impl LifecycleService {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        units: Arc<dyn UnitRepository>,
        rents: Arc<dyn RentRepository>,
    ) -> Self {
        Self {
            tenants,
            units,
            rents,
        }
    }

    /// Onboard a tenant onto an Available unit.
    ///
    /// Double booking is rejected: the availability check here is advisory,
    /// the adapter re-checks with a conditional flip inside the insert
    /// transaction, so two concurrent onboardings of the same unit cannot
    /// both succeed.
    pub async fn onboard_tenant(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        // 1. Target unit must resolve to a live unit
        let unit_id = tenant.unit_id.ok_or_else(|| {
            DomainError::ValidationError("unitId is required".to_string())
        })?;
        let unit = self
            .units
            .find_by_id(&unit_id)
            .await?
            .filter(|u| !u.is_deleted)
            .ok_or(DomainError::UnitNotFound)?;

        // 2. Reject anything but an Available unit
        if unit.availability_status != AvailabilityStatus::Available {
            warn!(
                "Onboarding rejected: unit {} is {}",
                unit_id,
                unit.availability_status.as_str()
            );
            return Err(DomainError::UnitNotAvailable);
        }

        // 3. Tenant code must be unique
        if self
            .tenants
            .find_by_code(&tenant.tenant_code)
            .await?
            .is_some()
        {
            return Err(DomainError::TenantCodeAlreadyExists);
        }

        // 4. Insert tenant + flip unit to Occupied, atomically
        let created = self.tenants.onboard(&tenant).await?;

        info!("Tenant {} onboarded, unit {} occupied", created.id, unit_id);
        Ok(created)
    }

    /// Vacate a tenant and release its unit.
    ///
    /// Idempotent: a tenant that has already vacated is returned as-is and
    /// no unit is touched, so a retry can never flip a unit somebody else
    /// has since occupied.
    pub async fn vacate_tenant(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        let tenant = self
            .tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;

        if tenant.is_vacated() {
            info!("Vacate is a no-op, tenant {} already vacated", id);
            return Ok(tenant);
        }

        let vacated = self.tenants.vacate(id).await?;
        info!("Tenant {} vacated, unit released", id);
        Ok(vacated)
    }

    /// Record one month's rent for a tenant.
    pub async fn add_monthly_rent(
        &self,
        tenant_id: &Uuid,
        entry: NewRentEntry,
    ) -> Result<RentRecord, DomainError> {
        let tenant = self
            .tenants
            .find_by_id(tenant_id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;

        // The row is bound to the unit the tenant occupies right now; a
        // vacated tenant has none to bill.
        let unit_id = tenant
            .unit_id
            .filter(|_| tenant.is_active())
            .ok_or(DomainError::TenantWithoutUnit)?;

        if self
            .rents
            .find_by_tenant_and_month(tenant_id, &entry.month)
            .await?
            .is_some()
        {
            return Err(DomainError::RentMonthAlreadyExists(entry.month));
        }

        let record = RentRecord::new(
            *tenant_id,
            unit_id,
            entry.month,
            entry.rent_amount,
            entry.maintenance_amount,
            entry.payment_status,
            entry.paid_on,
        )?;

        // The unique (tenant, month) index backstops the check above under
        // concurrency.
        let created = self.rents.create(&record).await?;
        info!(
            "Rent recorded for tenant {}, month {}, total {}",
            tenant_id, created.month, created.total_amount
        );
        Ok(created)
    }

    /// Rent history for a tenant, vacated or not.
    pub async fn rent_history(&self, tenant_id: &Uuid) -> Result<Vec<RentRecord>, DomainError> {
        self.tenants
            .find_by_id(tenant_id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;
        self.rents.find_by_tenant(tenant_id).await
    }

    /// Overwrite provided fields; the total follows the amounts.
    pub async fn update_rent(
        &self,
        rent_id: &Uuid,
        changes: RentUpdate,
    ) -> Result<RentRecord, DomainError> {
        let mut record = self
            .rents
            .find_by_id(rent_id)
            .await?
            .ok_or(DomainError::RentRecordNotFound)?;

        record.apply_amounts(changes.rent_amount, changes.maintenance_amount)?;
        if let Some(status) = changes.payment_status {
            record.payment_status = status;
        }
        if let Some(paid_on) = changes.paid_on {
            record.paid_on = Some(paid_on);
        }
        record.modified_at = Some(Utc::now());

        self.rents.update(&record).await
    }

    /// Hard delete of a ledger row; tenant and unit state are untouched.
    pub async fn delete_rent(&self, rent_id: &Uuid) -> Result<(), DomainError> {
        self.rents
            .find_by_id(rent_id)
            .await?
            .ok_or(DomainError::RentRecordNotFound)?;
        self.rents.delete(rent_id).await
    }

    /// Load everything a receipt needs, enforcing the Paid precondition.
    pub async fn receipt_data(&self, rent_id: &Uuid) -> Result<ReceiptData, DomainError> {
        let rent = self
            .rents
            .find_by_id(rent_id)
            .await?
            .ok_or(DomainError::RentRecordNotFound)?;

        if !rent.is_paid() {
            return Err(DomainError::ReceiptNotEligible);
        }

        let tenant = self
            .tenants
            .find_by_id(&rent.tenant_id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;
        let unit = self.units.find_by_id(&rent.unit_id).await?;

        Ok(ReceiptData { rent, tenant, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FurnishingStatus, TenantStatus, UnitType};
    use crate::repositories::rent_repository::MockRentRepository;
    use crate::repositories::tenant_repository::MockTenantRepository;
    use crate::repositories::unit_repository::MockUnitRepository;

    fn sample_unit(status: AvailabilityStatus) -> Unit {
        Unit {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            floor_id: Uuid::new_v4(),
            unit_number: "A-101".to_string(),
            unit_type: UnitType::Flat,
            square_feet: 900,
            square_meters: 84,
            square_rate: 55,
            bedrooms: Some(2),
            bathrooms: Some(1),
            balconies: None,
            rent_amount: 10_000,
            security_deposit: None,
            maintenance_charge: 500,
            availability_status: status,
            furnishing_status: FurnishingStatus::Unfurnished,
            parking_available: false,
            is_deleted: false,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    fn sample_tenant(unit_id: Option<Uuid>, status: TenantStatus) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            tenant_code: "TEN-0001".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            full_name: "Asha Rao".to_string(),
            gender: None,
            mobile_number: "9000000001".to_string(),
            alternate_phone: None,
            email: None,
            id_type: None,
            id_number: None,
            id_document: None,
            address_line1: None,
            address_line2: None,
            city: None,
            state: None,
            country: None,
            pincode: None,
            unit_id,
            status,
            lease_start_date: None,
            is_deleted: status == TenantStatus::Vacated,
            created_by: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    fn service(
        tenants: MockTenantRepository,
        units: MockUnitRepository,
        rents: MockRentRepository,
    ) -> LifecycleService {
        LifecycleService::new(Arc::new(tenants), Arc::new(units), Arc::new(rents))
    }

    #[tokio::test]
    async fn test_onboarding_rejects_missing_unit() {
        let mut units = MockUnitRepository::new();
        units.expect_find_by_id().returning(|_| Ok(None));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_onboard().times(0);

        let svc = service(tenants, units, MockRentRepository::new());
        let tenant = sample_tenant(Some(Uuid::new_v4()), TenantStatus::Active);

        assert!(matches!(
            svc.onboard_tenant(tenant).await,
            Err(DomainError::UnitNotFound)
        ));
    }

    #[tokio::test]
    async fn test_onboarding_rejects_occupied_unit() {
        let unit = sample_unit(AvailabilityStatus::Occupied);
        let unit_id = unit.id;

        let mut units = MockUnitRepository::new();
        units
            .expect_find_by_id()
            .returning(move |_| Ok(Some(unit.clone())));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_onboard().times(0);

        let svc = service(tenants, units, MockRentRepository::new());
        let tenant = sample_tenant(Some(unit_id), TenantStatus::Active);

        assert!(matches!(
            svc.onboard_tenant(tenant).await,
            Err(DomainError::UnitNotAvailable)
        ));
    }

    #[tokio::test]
    async fn test_onboarding_rejects_duplicate_code() {
        let unit = sample_unit(AvailabilityStatus::Available);
        let unit_id = unit.id;

        let mut units = MockUnitRepository::new();
        units
            .expect_find_by_id()
            .returning(move |_| Ok(Some(unit.clone())));

        let mut tenants = MockTenantRepository::new();
        let existing = sample_tenant(Some(unit_id), TenantStatus::Active);
        tenants
            .expect_find_by_code()
            .returning(move |_| Ok(Some(existing.clone())));
        tenants.expect_onboard().times(0);

        let svc = service(tenants, units, MockRentRepository::new());
        let tenant = sample_tenant(Some(unit_id), TenantStatus::Active);

        assert!(matches!(
            svc.onboard_tenant(tenant).await,
            Err(DomainError::TenantCodeAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_onboarding_accepts_available_unit() {
        let unit = sample_unit(AvailabilityStatus::Available);
        let unit_id = unit.id;

        let mut units = MockUnitRepository::new();
        units
            .expect_find_by_id()
            .returning(move |_| Ok(Some(unit.clone())));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_by_code().returning(|_| Ok(None));
        tenants
            .expect_onboard()
            .times(1)
            .returning(|t| Ok(t.clone()));

        let svc = service(tenants, units, MockRentRepository::new());
        let tenant = sample_tenant(Some(unit_id), TenantStatus::Active);

        let created = svc.onboard_tenant(tenant).await.unwrap();
        assert_eq!(created.unit_id, Some(unit_id));
        assert!(created.is_active());
    }

    #[tokio::test]
    async fn test_vacate_is_noop_for_vacated_tenant() {
        let tenant = sample_tenant(None, TenantStatus::Vacated);
        let tenant_id = tenant.id;

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));
        tenants.expect_vacate().times(0);

        let svc = service(tenants, MockUnitRepository::new(), MockRentRepository::new());

        let result = svc.vacate_tenant(&tenant_id).await.unwrap();
        assert!(result.is_vacated());
    }

    #[tokio::test]
    async fn test_vacate_active_tenant_releases_unit() {
        let tenant = sample_tenant(Some(Uuid::new_v4()), TenantStatus::Active);
        let tenant_id = tenant.id;

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));
        tenants.expect_vacate().times(1).returning(move |id| {
            let mut t = sample_tenant(None, TenantStatus::Vacated);
            t.id = *id;
            Ok(t)
        });

        let svc = service(tenants, MockUnitRepository::new(), MockRentRepository::new());

        let vacated = svc.vacate_tenant(&tenant_id).await.unwrap();
        assert!(vacated.is_vacated());
        assert!(vacated.unit_id.is_none());
        assert!(vacated.is_deleted);
    }

    #[tokio::test]
    async fn test_rent_total_computed_at_write() {
        let unit_id = Uuid::new_v4();
        let tenant = sample_tenant(Some(unit_id), TenantStatus::Active);
        let tenant_id = tenant.id;

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut rents = MockRentRepository::new();
        rents
            .expect_find_by_tenant_and_month()
            .returning(|_, _| Ok(None));
        rents
            .expect_create()
            .times(1)
            .returning(|r| Ok(r.clone()));

        let svc = service(tenants, MockUnitRepository::new(), rents);

        let record = svc
            .add_monthly_rent(
                &tenant_id,
                NewRentEntry {
                    month: "2024-01".into(),
                    rent_amount: 10_000,
                    maintenance_amount: 500,
                    payment_status: PaymentStatus::Pending,
                    paid_on: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.total_amount, 10_500);
        assert_eq!(record.unit_id, unit_id);
        assert_eq!(record.payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn test_duplicate_month_rejected() {
        let unit_id = Uuid::new_v4();
        let tenant = sample_tenant(Some(unit_id), TenantStatus::Active);
        let tenant_id = tenant.id;

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut rents = MockRentRepository::new();
        let existing = RentRecord::new(
            tenant_id,
            unit_id,
            "2024-01".into(),
            10_000,
            500,
            PaymentStatus::Pending,
            None,
        )
        .unwrap();
        rents
            .expect_find_by_tenant_and_month()
            .returning(move |_, _| Ok(Some(existing.clone())));
        rents.expect_create().times(0);

        let svc = service(tenants, MockUnitRepository::new(), rents);

        let result = svc
            .add_monthly_rent(
                &tenant_id,
                NewRentEntry {
                    month: "2024-01".into(),
                    rent_amount: 11_000,
                    maintenance_amount: 0,
                    payment_status: PaymentStatus::Pending,
                    paid_on: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::RentMonthAlreadyExists(m)) if m == "2024-01"
        ));
    }

    #[tokio::test]
    async fn test_vacated_tenant_cannot_be_billed() {
        let tenant = sample_tenant(None, TenantStatus::Vacated);
        let tenant_id = tenant.id;

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut rents = MockRentRepository::new();
        rents.expect_create().times(0);

        let svc = service(tenants, MockUnitRepository::new(), rents);

        let result = svc
            .add_monthly_rent(
                &tenant_id,
                NewRentEntry {
                    month: "2024-02".into(),
                    rent_amount: 10_000,
                    maintenance_amount: 0,
                    payment_status: PaymentStatus::Pending,
                    paid_on: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::TenantWithoutUnit)));
    }

    #[tokio::test]
    async fn test_update_recomputes_total() {
        let record = RentRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2024-01".into(),
            10_000,
            500,
            PaymentStatus::Pending,
            None,
        )
        .unwrap();
        let rent_id = record.id;

        let mut rents = MockRentRepository::new();
        rents
            .expect_find_by_id()
            .returning(move |_| Ok(Some(record.clone())));
        rents
            .expect_update()
            .times(1)
            .returning(|r| Ok(r.clone()));

        let svc = service(
            MockTenantRepository::new(),
            MockUnitRepository::new(),
            rents,
        );

        let updated = svc
            .update_rent(
                &rent_id,
                RentUpdate {
                    rent_amount: Some(12_000),
                    maintenance_amount: None,
                    payment_status: Some(PaymentStatus::Paid),
                    paid_on: NaiveDate::from_ymd_opt(2024, 1, 5),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.total_amount, 12_500);
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
        assert_eq!(updated.paid_on, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[tokio::test]
    async fn test_receipt_requires_paid_status() {
        for status in [PaymentStatus::Pending, PaymentStatus::Late] {
            let record = RentRecord::new(
                Uuid::new_v4(),
                Uuid::new_v4(),
                "2024-01".into(),
                10_000,
                500,
                status,
                None,
            )
            .unwrap();
            let rent_id = record.id;

            let mut rents = MockRentRepository::new();
            rents
                .expect_find_by_id()
                .returning(move |_| Ok(Some(record.clone())));

            let svc = service(
                MockTenantRepository::new(),
                MockUnitRepository::new(),
                rents,
            );

            assert!(matches!(
                svc.receipt_data(&rent_id).await,
                Err(DomainError::ReceiptNotEligible)
            ));
        }
    }

    #[tokio::test]
    async fn test_receipt_for_paid_record() {
        let unit = sample_unit(AvailabilityStatus::Occupied);
        let tenant = sample_tenant(Some(unit.id), TenantStatus::Active);
        let record = RentRecord::new(
            tenant.id,
            unit.id,
            "2024-01".into(),
            10_000,
            500,
            PaymentStatus::Paid,
            NaiveDate::from_ymd_opt(2024, 1, 5),
        )
        .unwrap();
        let rent_id = record.id;

        let mut rents = MockRentRepository::new();
        rents
            .expect_find_by_id()
            .returning(move |_| Ok(Some(record.clone())));

        let mut tenants = MockTenantRepository::new();
        let t = tenant.clone();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(t.clone())));

        let mut units = MockUnitRepository::new();
        let u = unit.clone();
        units
            .expect_find_by_id()
            .returning(move |_| Ok(Some(u.clone())));

        let svc = service(tenants, units, rents);

        let data = svc.receipt_data(&rent_id).await.unwrap();
        assert_eq!(data.rent.total_amount, 10_500);
        assert_eq!(data.tenant.full_name, "Asha Rao");
        assert_eq!(data.unit.unwrap().unit_number, "A-101");
    }
}
