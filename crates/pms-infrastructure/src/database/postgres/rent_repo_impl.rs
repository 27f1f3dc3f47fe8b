// ============================================================================
// PMS Infrastructure - PostgreSQL Rent Repository
// File: crates/pms-infrastructure/src/database/postgres/rent_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use pms_core::domain::{PaymentStatus, PaymentSummary, RentRecord};
use pms_core::error::DomainError;
use pms_core::repositories::RentRepository;

const RENT_COLUMNS: &str = r#"
    id, tenant_id, unit_id, month,
    rent_amount, maintenance_amount, total_amount,
    payment_status, paid_on, created_at, modified_at
"#;

pub struct PgRentRepository {
    pool: PgPool,
}

impl PgRentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RentRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub unit_id: Uuid,
    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub total_amount: i64,
    pub payment_status: String,
    pub paid_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<RentRow> for RentRecord {
    fn from(row: RentRow) -> Self {
        RentRecord {
            id: row.id,
            tenant_id: row.tenant_id,
            unit_id: row.unit_id,
            month: row.month,
            rent_amount: row.rent_amount,
            maintenance_amount: row.maintenance_amount,
            total_amount: row.total_amount,
            payment_status: PaymentStatus::from_str(&row.payment_status).unwrap_or_default(),
            paid_on: row.paid_on,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// Flattened ledger row. Joined catalog names are NULL when the reference is
// broken or soft-deleted; tenant names survive vacating so history stays
// readable.
#[derive(Debug, FromRow)]
struct PaymentRow {
    pub id: Uuid,
    pub tenant_name: Option<String>,
    pub property_name: Option<String>,
    pub unit_number: Option<String>,
    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub total_amount: i64,
    pub payment_status: String,
    pub paid_on: Option<NaiveDate>,
}

impl From<PaymentRow> for PaymentSummary {
    fn from(row: PaymentRow) -> Self {
        PaymentSummary {
            id: row.id,
            tenant_name: row.tenant_name,
            property_name: row.property_name,
            unit_number: row.unit_number,
            month: row.month,
            rent_amount: row.rent_amount,
            maintenance_amount: row.maintenance_amount,
            total_amount: row.total_amount,
            payment_status: PaymentStatus::from_str(&row.payment_status).unwrap_or_default(),
            paid_on: row.paid_on,
        }
    }
}

#[async_trait]
impl RentRepository for PgRentRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentRecord>, DomainError> {
        let row: Option<RentRow> = sqlx::query_as(&format!(
            "SELECT {RENT_COLUMNS} FROM rent_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding rent record: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<RentRecord>, DomainError> {
        let rows: Vec<RentRow> = sqlx::query_as(&format!(
            "SELECT {RENT_COLUMNS} FROM rent_records WHERE tenant_id = $1 ORDER BY month DESC"
        ))
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing rent records: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Found {} rent rows for tenant {}", rows.len(), tenant_id);
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_tenant_and_month(
        &self,
        tenant_id: &Uuid,
        month: &str,
    ) -> Result<Option<RentRecord>, DomainError> {
        let row: Option<RentRow> = sqlx::query_as(&format!(
            "SELECT {RENT_COLUMNS} FROM rent_records WHERE tenant_id = $1 AND month = $2"
        ))
        .bind(tenant_id)
        .bind(month)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding rent by month: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, record: &RentRecord) -> Result<RentRecord, DomainError> {
        let row: RentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO rent_records (
                id, tenant_id, unit_id, month,
                rent_amount, maintenance_amount, total_amount,
                payment_status, paid_on, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {RENT_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(record.tenant_id)
        .bind(record.unit_id)
        .bind(&record.month)
        .bind(record.rent_amount)
        .bind(record.maintenance_amount)
        .bind(record.total_amount)
        .bind(record.payment_status.as_str())
        .bind(record.paid_on)
        .bind(record.created_at)
        .bind(record.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating rent record: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::RentMonthAlreadyExists(record.month.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, record: &RentRecord) -> Result<RentRecord, DomainError> {
        let row: RentRow = sqlx::query_as(&format!(
            r#"
            UPDATE rent_records
            SET
                rent_amount = $2,
                maintenance_amount = $3,
                total_amount = $4,
                payment_status = $5,
                paid_on = $6,
                modified_at = $7
            WHERE id = $1
            RETURNING {RENT_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(record.rent_amount)
        .bind(record.maintenance_amount)
        .bind(record.total_amount)
        .bind(record.payment_status.as_str())
        .bind(record.paid_on)
        .bind(record.modified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating rent record: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::RentRecordNotFound)?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM rent_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting rent record: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn list_payments(&self) -> Result<Vec<PaymentSummary>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT
                r.id,
                t.full_name AS tenant_name,
                p.property_name,
                u.unit_number,
                r.month,
                r.rent_amount,
                r.maintenance_amount,
                r.total_amount,
                r.payment_status,
                r.paid_on
            FROM rent_records r
            LEFT JOIN tenants t ON t.id = r.tenant_id
            LEFT JOIN units u ON u.id = r.unit_id AND u.is_deleted = FALSE
            LEFT JOIN properties p ON p.id = u.property_id AND p.is_deleted = FALSE
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing payments: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
