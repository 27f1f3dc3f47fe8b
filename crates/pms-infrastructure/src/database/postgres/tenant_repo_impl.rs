// ============================================================================
// PMS Infrastructure - PostgreSQL Tenant Repository
// File: crates/pms-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use pms_core::domain::{Gender, IdType, Tenant, TenantStatus};
use pms_core::error::DomainError;
use pms_core::repositories::TenantRepository;

const TENANT_COLUMNS: &str = r#"
    id, tenant_code, first_name, last_name, full_name, gender,
    mobile_number, alternate_phone, email,
    id_type, id_number, id_document,
    address_line1, address_line2, city, state, country, pincode,
    unit_id, status, lease_start_date,
    is_deleted, created_by, created_at, modified_at
"#;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: Uuid,
    pub tenant_code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub mobile_number: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub id_document: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub unit_id: Option<Uuid>,
    pub status: String,
    pub lease_start_date: Option<NaiveDate>,
    pub is_deleted: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            tenant_code: row.tenant_code,
            first_name: row.first_name,
            last_name: row.last_name,
            full_name: row.full_name,
            gender: row.gender.as_deref().and_then(Gender::from_str),
            mobile_number: row.mobile_number,
            alternate_phone: row.alternate_phone,
            email: row.email,
            id_type: row.id_type.as_deref().and_then(IdType::from_str),
            id_number: row.id_number,
            id_document: row.id_document,
            address_line1: row.address_line1,
            address_line2: row.address_line2,
            city: row.city,
            state: row.state,
            country: row.country,
            pincode: row.pincode,
            unit_id: row.unit_id,
            status: TenantStatus::from_str(&row.status).unwrap_or_default(),
            lease_start_date: row.lease_start_date,
            is_deleted: row.is_deleted,
            created_by: row.created_by,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        // No is_deleted filter: vacated tenants stay addressable for
        // idempotent vacate and for receipt/history reads.
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding tenant by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_code(&self, tenant_code: &str) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE tenant_code = $1 AND is_deleted = FALSE"
        ))
        .bind(tenant_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding tenant by code: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE is_deleted = FALSE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing tenants: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let row: TenantRow = sqlx::query_as(&format!(
            r#"
            UPDATE tenants
            SET
                tenant_code = $2,
                first_name = $3,
                last_name = $4,
                full_name = $5,
                gender = $6,
                mobile_number = $7,
                alternate_phone = $8,
                email = $9,
                id_type = $10,
                id_number = $11,
                id_document = $12,
                address_line1 = $13,
                address_line2 = $14,
                city = $15,
                state = $16,
                country = $17,
                pincode = $18,
                lease_start_date = $19,
                modified_at = $20
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {TENANT_COLUMNS}
            "#
        ))
        .bind(tenant.id)
        .bind(&tenant.tenant_code)
        .bind(&tenant.first_name)
        .bind(&tenant.last_name)
        .bind(&tenant.full_name)
        .bind(tenant.gender.map(|g| g.as_str()))
        .bind(&tenant.mobile_number)
        .bind(&tenant.alternate_phone)
        .bind(&tenant.email)
        .bind(tenant.id_type.map(|t| t.as_str()))
        .bind(&tenant.id_number)
        .bind(&tenant.id_document)
        .bind(&tenant.address_line1)
        .bind(&tenant.address_line2)
        .bind(&tenant.city)
        .bind(&tenant.state)
        .bind(&tenant.country)
        .bind(&tenant.pincode)
        .bind(tenant.lease_start_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating tenant: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::TenantNotFound)?;

        Ok(row.into())
    }

    async fn onboard(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let unit_id = tenant.unit_id.ok_or_else(|| {
            DomainError::ValidationError("unitId is required".to_string())
        })?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Failed to open onboarding transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // Conditional flip: only an Available, live unit can be taken. Zero
        // rows means a concurrent onboarding (or a delete) got here first.
        let flipped = sqlx::query(
            r#"
            UPDATE units
            SET availability_status = 'Occupied', modified_at = NOW()
            WHERE id = $1 AND availability_status = 'Available' AND is_deleted = FALSE
            "#,
        )
        .bind(unit_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("Database error flipping unit occupancy: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if flipped.rows_affected() == 0 {
            return Err(DomainError::UnitNotAvailable);
        }

        let row: TenantRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO tenants (
                id, tenant_code, first_name, last_name, full_name, gender,
                mobile_number, alternate_phone, email,
                id_type, id_number, id_document,
                address_line1, address_line2, city, state, country, pincode,
                unit_id, status, lease_start_date,
                is_deleted, created_by, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
            RETURNING {TENANT_COLUMNS}
            "#
        ))
        .bind(tenant.id)
        .bind(&tenant.tenant_code)
        .bind(&tenant.first_name)
        .bind(&tenant.last_name)
        .bind(&tenant.full_name)
        .bind(tenant.gender.map(|g| g.as_str()))
        .bind(&tenant.mobile_number)
        .bind(&tenant.alternate_phone)
        .bind(&tenant.email)
        .bind(tenant.id_type.map(|t| t.as_str()))
        .bind(&tenant.id_number)
        .bind(&tenant.id_document)
        .bind(&tenant.address_line1)
        .bind(&tenant.address_line2)
        .bind(&tenant.city)
        .bind(&tenant.state)
        .bind(&tenant.country)
        .bind(&tenant.pincode)
        .bind(unit_id)
        .bind(tenant.status.as_str())
        .bind(tenant.lease_start_date)
        .bind(tenant.is_deleted)
        .bind(tenant.created_by)
        .bind(tenant.created_at)
        .bind(tenant.modified_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating tenant: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::TenantCodeAlreadyExists
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        tx.commit().await.map_err(|e| {
            error!("Failed to commit onboarding transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Tenant created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn vacate(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Failed to open vacate transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // The unit reference is captured before it is cleared.
        let current: TenantRow = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading tenant for vacate: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::TenantNotFound)?;

        if current.status == "Vacated" {
            return Ok(current.into());
        }
        let unit_id = current.unit_id;

        let row: TenantRow = sqlx::query_as(&format!(
            r#"
            UPDATE tenants
            SET status = 'Vacated', is_deleted = TRUE, unit_id = NULL, modified_at = NOW()
            WHERE id = $1
            RETURNING {TENANT_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error vacating tenant: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // Unit release is the final write so an abort leaves the tenant
        // still occupying rather than a freed unit with a dangling tenant.
        if let Some(unit_id) = unit_id {
            sqlx::query(
                "UPDATE units SET availability_status = 'Available', modified_at = NOW() WHERE id = $1",
            )
            .bind(unit_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Database error releasing unit: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!("Failed to commit vacate transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Tenant vacated successfully: {}", id);
        Ok(row.into())
    }
}
