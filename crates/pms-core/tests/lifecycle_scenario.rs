//! Full lifecycle walk-through over in-memory adapters: onboard, bill, pay,
//! receipt, vacate. The fakes mirror the conditional-flip semantics of the
//! SQL adapters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use pms_core::domain::{
    AvailabilityStatus, FurnishingStatus, PaymentStatus, PaymentSummary, RentRecord, Tenant,
    TenantStatus, Unit, UnitType,
};
use pms_core::error::DomainError;
use pms_core::repositories::{RentRepository, TenantRepository, UnitRepository};
use pms_core::services::{LifecycleService, NewRentEntry, RentUpdate};

#[derive(Default)]
struct Store {
    units: Mutex<HashMap<Uuid, Unit>>,
    tenants: Mutex<HashMap<Uuid, Tenant>>,
    rents: Mutex<HashMap<Uuid, RentRecord>>,
}

struct Units(Arc<Store>);
struct Tenants(Arc<Store>);
struct Rents(Arc<Store>);

#[async_trait]
impl UnitRepository for Units {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Unit>, DomainError> {
        Ok(self.0.units.lock().unwrap().get(id).cloned())
    }

    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Unit>, DomainError> {
        Ok(self
            .0
            .units
            .lock()
            .unwrap()
            .values()
            .filter(|u| &u.property_id == property_id && !u.is_deleted)
            .cloned()
            .collect())
    }

    async fn create(&self, unit: &Unit) -> Result<Unit, DomainError> {
        self.0.units.lock().unwrap().insert(unit.id, unit.clone());
        Ok(unit.clone())
    }

    async fn update(&self, unit: &Unit) -> Result<Unit, DomainError> {
        self.0.units.lock().unwrap().insert(unit.id, unit.clone());
        Ok(unit.clone())
    }

    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if let Some(unit) = self.0.units.lock().unwrap().get_mut(id) {
            unit.is_deleted = true;
        }
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for Tenants {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        Ok(self.0.tenants.lock().unwrap().get(id).cloned())
    }

    async fn find_by_code(&self, tenant_code: &str) -> Result<Option<Tenant>, DomainError> {
        Ok(self
            .0
            .tenants
            .lock()
            .unwrap()
            .values()
            .find(|t| t.tenant_code == tenant_code && !t.is_deleted)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError> {
        Ok(self
            .0
            .tenants
            .lock()
            .unwrap()
            .values()
            .filter(|t| !t.is_deleted)
            .cloned()
            .collect())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        self.0
            .tenants
            .lock()
            .unwrap()
            .insert(tenant.id, tenant.clone());
        Ok(tenant.clone())
    }

    async fn onboard(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let unit_id = tenant.unit_id.ok_or(DomainError::UnitNotFound)?;
        let mut units = self.0.units.lock().unwrap();
        let unit = units.get_mut(&unit_id).ok_or(DomainError::UnitNotFound)?;
        // Conditional flip, as the SQL adapter does with a guarded UPDATE.
        if unit.is_deleted || unit.availability_status != AvailabilityStatus::Available {
            return Err(DomainError::UnitNotAvailable);
        }
        unit.availability_status = AvailabilityStatus::Occupied;
        self.0
            .tenants
            .lock()
            .unwrap()
            .insert(tenant.id, tenant.clone());
        Ok(tenant.clone())
    }

    async fn vacate(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        let mut tenants = self.0.tenants.lock().unwrap();
        let tenant = tenants.get_mut(id).ok_or(DomainError::TenantNotFound)?;
        let unit_id = tenant.unit_id;
        tenant.status = TenantStatus::Vacated;
        tenant.is_deleted = true;
        tenant.unit_id = None;
        tenant.modified_at = Some(Utc::now());
        let vacated = tenant.clone();
        drop(tenants);
        // Unit release is the final step.
        if let Some(unit_id) = unit_id {
            if let Some(unit) = self.0.units.lock().unwrap().get_mut(&unit_id) {
                unit.availability_status = AvailabilityStatus::Available;
            }
        }
        Ok(vacated)
    }
}

#[async_trait]
impl RentRepository for Rents {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentRecord>, DomainError> {
        Ok(self.0.rents.lock().unwrap().get(id).cloned())
    }

    async fn find_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<RentRecord>, DomainError> {
        Ok(self
            .0
            .rents
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn find_by_tenant_and_month(
        &self,
        tenant_id: &Uuid,
        month: &str,
    ) -> Result<Option<RentRecord>, DomainError> {
        Ok(self
            .0
            .rents
            .lock()
            .unwrap()
            .values()
            .find(|r| &r.tenant_id == tenant_id && r.month == month)
            .cloned())
    }

    async fn create(&self, record: &RentRecord) -> Result<RentRecord, DomainError> {
        let mut rents = self.0.rents.lock().unwrap();
        if rents
            .values()
            .any(|r| r.tenant_id == record.tenant_id && r.month == record.month)
        {
            return Err(DomainError::RentMonthAlreadyExists(record.month.clone()));
        }
        rents.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &RentRecord) -> Result<RentRecord, DomainError> {
        self.0
            .rents
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.0.rents.lock().unwrap().remove(id);
        Ok(())
    }

    async fn list_payments(&self) -> Result<Vec<PaymentSummary>, DomainError> {
        Ok(Vec::new())
    }
}

fn new_unit(store: &Store) -> Unit {
    let unit = Unit {
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
        availability_status: AvailabilityStatus::Available,
        furnishing_status: FurnishingStatus::Unfurnished,
        parking_available: false,
        is_deleted: false,
        created_at: Utc::now(),
        modified_at: None,
    };
    store.units.lock().unwrap().insert(unit.id, unit.clone());
    unit
}

fn new_tenant(code: &str, unit_id: Uuid) -> Tenant {
    Tenant {
        id: Uuid::new_v4(),
        tenant_code: code.to_string(),
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
        unit_id: Some(unit_id),
        status: TenantStatus::Active,
        lease_start_date: None,
        is_deleted: false,
        created_by: None,
        created_at: Utc::now(),
        modified_at: None,
    }
}

fn occupancy_consistent(store: &Store) -> bool {
    let units = store.units.lock().unwrap();
    let tenants = store.tenants.lock().unwrap();
    units.values().all(|unit| {
        let active_refs = tenants
            .values()
            .filter(|t| t.unit_id == Some(unit.id) && t.status == TenantStatus::Active)
            .count();
        match unit.availability_status {
            AvailabilityStatus::Occupied => active_refs == 1,
            _ => active_refs == 0,
        }
    })
}

fn service(store: &Arc<Store>) -> LifecycleService {
    LifecycleService::new(
        Arc::new(Tenants(store.clone())),
        Arc::new(Units(store.clone())),
        Arc::new(Rents(store.clone())),
    )
}

#[tokio::test]
async fn test_full_lifecycle() {
    let store = Arc::new(Store::default());
    let svc = service(&store);

    let unit = new_unit(&store);
    let tenant = new_tenant("TEN-0001", unit.id);

    // Onboard: the unit becomes Occupied.
    let tenant = svc.onboard_tenant(tenant).await.unwrap();
    assert_eq!(
        store.units.lock().unwrap()[&unit.id].availability_status,
        AvailabilityStatus::Occupied
    );
    assert!(occupancy_consistent(&store));

    // Bill January: 10000 + 500 = 10500, Pending.
    let rent = svc
        .add_monthly_rent(
            &tenant.id,
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
    assert_eq!(rent.total_amount, 10_500);
    assert_eq!(rent.payment_status, PaymentStatus::Pending);

    // A second January row is rejected and the first is untouched.
    let duplicate = svc
        .add_monthly_rent(
            &tenant.id,
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
        duplicate,
        Err(DomainError::RentMonthAlreadyExists(_))
    ));
    assert_eq!(
        store.rents.lock().unwrap()[&rent.id].total_amount,
        10_500
    );

    // No receipt before payment.
    assert!(matches!(
        svc.receipt_data(&rent.id).await,
        Err(DomainError::ReceiptNotEligible)
    ));

    // Mark January paid; receipt becomes available.
    svc.update_rent(
        &rent.id,
        RentUpdate {
            payment_status: Some(PaymentStatus::Paid),
            paid_on: NaiveDate::from_ymd_opt(2024, 1, 5),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let receipt = svc.receipt_data(&rent.id).await.unwrap();
    assert_eq!(receipt.rent.total_amount, 10_500);
    assert_eq!(receipt.tenant.full_name, "Asha Rao");
    assert_eq!(receipt.unit.as_ref().unwrap().unit_number, "A-101");

    // Vacate: the unit is released and the tenant soft-deleted.
    let vacated = svc.vacate_tenant(&tenant.id).await.unwrap();
    assert_eq!(vacated.status, TenantStatus::Vacated);
    assert!(vacated.unit_id.is_none());
    assert_eq!(
        store.units.lock().unwrap()[&unit.id].availability_status,
        AvailabilityStatus::Available
    );
    assert!(occupancy_consistent(&store));

    // Vacating again is a no-op.
    let again = svc.vacate_tenant(&tenant.id).await.unwrap();
    assert_eq!(again.status, TenantStatus::Vacated);
    assert_eq!(
        store.units.lock().unwrap()[&unit.id].availability_status,
        AvailabilityStatus::Available
    );

    // Billing a vacated tenant fails.
    let late_bill = svc
        .add_monthly_rent(
            &tenant.id,
            NewRentEntry {
                month: "2024-02".into(),
                rent_amount: 10_000,
                maintenance_amount: 500,
                payment_status: PaymentStatus::Pending,
                paid_on: None,
            },
        )
        .await;
    assert!(matches!(late_bill, Err(DomainError::TenantWithoutUnit)));
}

#[tokio::test]
async fn test_double_booking_rejected() {
    let store = Arc::new(Store::default());
    let svc = service(&store);

    let unit = new_unit(&store);
    svc.onboard_tenant(new_tenant("TEN-0001", unit.id))
        .await
        .unwrap();

    let second = svc.onboard_tenant(new_tenant("TEN-0002", unit.id)).await;
    assert!(matches!(second, Err(DomainError::UnitNotAvailable)));
    assert!(occupancy_consistent(&store));
}

#[tokio::test]
async fn test_rent_delete_leaves_occupancy_alone() {
    let store = Arc::new(Store::default());
    let svc = service(&store);

    let unit = new_unit(&store);
    let tenant = svc
        .onboard_tenant(new_tenant("TEN-0001", unit.id))
        .await
        .unwrap();

    let rent = svc
        .add_monthly_rent(
            &tenant.id,
            NewRentEntry {
                month: "2024-01".into(),
                rent_amount: 10_000,
                maintenance_amount: 0,
                payment_status: PaymentStatus::Pending,
                paid_on: None,
            },
        )
        .await
        .unwrap();

    svc.delete_rent(&rent.id).await.unwrap();
    assert!(store.rents.lock().unwrap().is_empty());
    assert_eq!(
        store.units.lock().unwrap()[&unit.id].availability_status,
        AvailabilityStatus::Occupied
    );
}
