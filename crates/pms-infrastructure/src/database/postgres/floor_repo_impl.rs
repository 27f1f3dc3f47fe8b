// ============================================================================
// PMS Infrastructure - PostgreSQL Floor Repository
// File: crates/pms-infrastructure/src/database/postgres/floor_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use pms_core::domain::{Floor, FloorType};
use pms_core::error::DomainError;
use pms_core::repositories::FloorRepository;

const FLOOR_COLUMNS: &str = r#"
    id, property_id, floor_number, floor_name, floor_type, total_units,
    is_active, is_deleted, created_at, modified_at
"#;

pub struct PgFloorRepository {
    pool: PgPool,
}

impl PgFloorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FloorRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub floor_number: i32,
    pub floor_name: Option<String>,
    pub floor_type: String,
    pub total_units: Option<i32>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<FloorRow> for Floor {
    fn from(row: FloorRow) -> Self {
        Floor {
            id: row.id,
            property_id: row.property_id,
            floor_number: row.floor_number,
            floor_name: row.floor_name,
            floor_type: FloorType::from_str(&row.floor_type).unwrap_or_default(),
            total_units: row.total_units,
            is_active: row.is_active,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl FloorRepository for PgFloorRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Floor>, DomainError> {
        let row: Option<FloorRow> = sqlx::query_as(&format!(
            "SELECT {FLOOR_COLUMNS} FROM floors WHERE id = $1 AND is_deleted = FALSE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding floor by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Floor>, DomainError> {
        let rows: Vec<FloorRow> = sqlx::query_as(&format!(
            "SELECT {FLOOR_COLUMNS} FROM floors WHERE is_deleted = FALSE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing floors: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Floor>, DomainError> {
        let rows: Vec<FloorRow> = sqlx::query_as(&format!(
            r#"
            SELECT {FLOOR_COLUMNS} FROM floors
            WHERE property_id = $1 AND is_deleted = FALSE
            ORDER BY floor_number ASC
            "#
        ))
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing floors by property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, floor: &Floor) -> Result<Floor, DomainError> {
        let row: FloorRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO floors (
                id, property_id, floor_number, floor_name, floor_type, total_units,
                is_active, is_deleted, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {FLOOR_COLUMNS}
            "#
        ))
        .bind(floor.id)
        .bind(floor.property_id)
        .bind(floor.floor_number)
        .bind(&floor.floor_name)
        .bind(floor.floor_type.as_str())
        .bind(floor.total_units)
        .bind(floor.is_active)
        .bind(floor.is_deleted)
        .bind(floor.created_at)
        .bind(floor.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating floor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update(&self, floor: &Floor) -> Result<Floor, DomainError> {
        let row: FloorRow = sqlx::query_as(&format!(
            r#"
            UPDATE floors
            SET
                floor_number = $2,
                floor_name = $3,
                floor_type = $4,
                total_units = $5,
                is_active = $6,
                modified_at = $7
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {FLOOR_COLUMNS}
            "#
        ))
        .bind(floor.id)
        .bind(floor.floor_number)
        .bind(&floor.floor_name)
        .bind(floor.floor_type.as_str())
        .bind(floor.total_units)
        .bind(floor.is_active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating floor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::FloorNotFound)?;

        Ok(row.into())
    }

    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE floors
            SET is_deleted = TRUE, is_active = FALSE, modified_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting floor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FloorNotFound);
        }
        Ok(())
    }
}
