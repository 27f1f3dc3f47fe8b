// ============================================================================
// PMS Infrastructure - PostgreSQL Property Repository
// File: crates/pms-infrastructure/src/database/postgres/property_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use pms_core::domain::{Location, OwnershipType, Property, PropertyStatus};
use pms_core::error::DomainError;
use pms_core::repositories::{PropertyFilter, PropertyRepository};

const PROPERTY_COLUMNS: &str = r#"
    id, property_code, property_name, property_type, ownership_type, description,
    country, state, city, area, address, landmark, pincode,
    property_status, is_deleted, created_at, modified_at
"#;

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PropertyRow {
    pub id: Uuid,
    pub property_code: String,
    pub property_name: String,
    pub property_type: String,
    pub ownership_type: String,
    pub description: Option<String>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub area: Option<String>,
    pub address: String,
    pub landmark: Option<String>,
    pub pincode: Option<String>,
    pub property_status: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            property_code: row.property_code,
            property_name: row.property_name,
            property_type: row.property_type,
            ownership_type: OwnershipType::from_str(&row.ownership_type).unwrap_or_default(),
            description: row.description,
            location: Location {
                country: row.country,
                state: row.state,
                city: row.city,
                area: row.area,
                address: row.address,
                landmark: row.landmark,
                pincode: row.pincode,
            },
            property_status: PropertyStatus::from_str(&row.property_status).unwrap_or_default(),
            is_deleted: row.is_deleted,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1 AND is_deleted = FALSE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding property by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            r#"
            SELECT {PROPERTY_COLUMNS} FROM properties
            WHERE is_deleted = FALSE
              AND ($1::TEXT IS NULL OR property_type = $1)
              AND ($2::TEXT IS NULL OR property_status = $2)
              AND ($3::TEXT IS NULL OR city = $3)
            ORDER BY created_at DESC
            "#
        ))
        .bind(&filter.property_type)
        .bind(&filter.property_status)
        .bind(&filter.city)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing properties: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        // Counts deleted rows too: codes are never reissued.
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error counting properties: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }

    async fn create(&self, property: &Property) -> Result<Property, DomainError> {
        let row: PropertyRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO properties (
                id, property_code, property_name, property_type, ownership_type, description,
                country, state, city, area, address, landmark, pincode,
                property_status, is_deleted, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(property.id)
        .bind(&property.property_code)
        .bind(&property.property_name)
        .bind(&property.property_type)
        .bind(property.ownership_type.as_str())
        .bind(&property.description)
        .bind(&property.location.country)
        .bind(&property.location.state)
        .bind(&property.location.city)
        .bind(&property.location.area)
        .bind(&property.location.address)
        .bind(&property.location.landmark)
        .bind(&property.location.pincode)
        .bind(property.property_status.as_str())
        .bind(property.is_deleted)
        .bind(property.created_at)
        .bind(property.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update(&self, property: &Property) -> Result<Property, DomainError> {
        // property_code is immutable once minted.
        let row: PropertyRow = sqlx::query_as(&format!(
            r#"
            UPDATE properties
            SET
                property_name = $2,
                property_type = $3,
                ownership_type = $4,
                description = $5,
                country = $6,
                state = $7,
                city = $8,
                area = $9,
                address = $10,
                landmark = $11,
                pincode = $12,
                property_status = $13,
                modified_at = $14
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(property.id)
        .bind(&property.property_name)
        .bind(&property.property_type)
        .bind(property.ownership_type.as_str())
        .bind(&property.description)
        .bind(&property.location.country)
        .bind(&property.location.state)
        .bind(&property.location.city)
        .bind(&property.location.area)
        .bind(&property.location.address)
        .bind(&property.location.landmark)
        .bind(&property.location.pincode)
        .bind(property.property_status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::PropertyNotFound)?;

        Ok(row.into())
    }

    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE properties
            SET is_deleted = TRUE, property_status = 'Inactive', modified_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting property: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PropertyNotFound);
        }
        Ok(())
    }
}
