// ============================================================================
// PMS Infrastructure - PostgreSQL Unit Repository
// File: crates/pms-infrastructure/src/database/postgres/unit_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use pms_core::domain::{AvailabilityStatus, FurnishingStatus, Unit, UnitType};
use pms_core::error::DomainError;
use pms_core::repositories::UnitRepository;

const UNIT_COLUMNS: &str = r#"
    id, property_id, floor_id, unit_number, unit_type,
    square_feet, square_meters, square_rate,
    bedrooms, bathrooms, balconies,
    rent_amount, security_deposit, maintenance_charge,
    availability_status, furnishing_status, parking_available,
    is_deleted, created_at, modified_at
"#;

pub struct PgUnitRepository {
    pool: PgPool,
}

impl PgUnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UnitRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub floor_id: Uuid,
    pub unit_number: String,
    pub unit_type: String,
    pub square_feet: i64,
    pub square_meters: i64,
    pub square_rate: i64,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub balconies: Option<i32>,
    pub rent_amount: i64,
    pub security_deposit: Option<i64>,
    pub maintenance_charge: i64,
    pub availability_status: String,
    pub furnishing_status: String,
    pub parking_available: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Unit {
            id: row.id,
            property_id: row.property_id,
            floor_id: row.floor_id,
            unit_number: row.unit_number,
            unit_type: UnitType::from_str(&row.unit_type).unwrap_or_default(),
            square_feet: row.square_feet,
            square_meters: row.square_meters,
            square_rate: row.square_rate,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            balconies: row.balconies,
            rent_amount: row.rent_amount,
            security_deposit: row.security_deposit,
            maintenance_charge: row.maintenance_charge,
            availability_status: AvailabilityStatus::from_str(&row.availability_status)
                .unwrap_or_default(),
            furnishing_status: FurnishingStatus::from_str(&row.furnishing_status)
                .unwrap_or_default(),
            parking_available: row.parking_available,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl UnitRepository for PgUnitRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Unit>, DomainError> {
        let row: Option<UnitRow> = sqlx::query_as(&format!(
            "SELECT {UNIT_COLUMNS} FROM units WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding unit by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Unit>, DomainError> {
        let rows: Vec<UnitRow> = sqlx::query_as(&format!(
            r#"
            SELECT {UNIT_COLUMNS} FROM units
            WHERE property_id = $1 AND is_deleted = FALSE
            ORDER BY created_at DESC
            "#
        ))
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing units by property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, unit: &Unit) -> Result<Unit, DomainError> {
        let row: UnitRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO units (
                id, property_id, floor_id, unit_number, unit_type,
                square_feet, square_meters, square_rate,
                bedrooms, bathrooms, balconies,
                rent_amount, security_deposit, maintenance_charge,
                availability_status, furnishing_status, parking_available,
                is_deleted, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING {UNIT_COLUMNS}
            "#
        ))
        .bind(unit.id)
        .bind(unit.property_id)
        .bind(unit.floor_id)
        .bind(&unit.unit_number)
        .bind(unit.unit_type.as_str())
        .bind(unit.square_feet)
        .bind(unit.square_meters)
        .bind(unit.square_rate)
        .bind(unit.bedrooms)
        .bind(unit.bathrooms)
        .bind(unit.balconies)
        .bind(unit.rent_amount)
        .bind(unit.security_deposit)
        .bind(unit.maintenance_charge)
        .bind(unit.availability_status.as_str())
        .bind(unit.furnishing_status.as_str())
        .bind(unit.parking_available)
        .bind(unit.is_deleted)
        .bind(unit.created_at)
        .bind(unit.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating unit: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::UnitNumberAlreadyExists(unit.unit_number.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, unit: &Unit) -> Result<Unit, DomainError> {
        let row: UnitRow = sqlx::query_as(&format!(
            r#"
            UPDATE units
            SET
                unit_number = $2,
                unit_type = $3,
                square_feet = $4,
                square_meters = $5,
                square_rate = $6,
                bedrooms = $7,
                bathrooms = $8,
                balconies = $9,
                rent_amount = $10,
                security_deposit = $11,
                maintenance_charge = $12,
                availability_status = $13,
                furnishing_status = $14,
                parking_available = $15,
                modified_at = $16
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {UNIT_COLUMNS}
            "#
        ))
        .bind(unit.id)
        .bind(&unit.unit_number)
        .bind(unit.unit_type.as_str())
        .bind(unit.square_feet)
        .bind(unit.square_meters)
        .bind(unit.square_rate)
        .bind(unit.bedrooms)
        .bind(unit.bathrooms)
        .bind(unit.balconies)
        .bind(unit.rent_amount)
        .bind(unit.security_deposit)
        .bind(unit.maintenance_charge)
        .bind(unit.availability_status.as_str())
        .bind(unit.furnishing_status.as_str())
        .bind(unit.parking_available)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating unit: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::UnitNotFound)?;

        Ok(row.into())
    }

    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE units SET is_deleted = TRUE, modified_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting unit: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
