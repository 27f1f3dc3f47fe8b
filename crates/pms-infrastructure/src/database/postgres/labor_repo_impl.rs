// ============================================================================
// PMS Infrastructure - PostgreSQL Labor Repository
// File: crates/pms-infrastructure/src/database/postgres/labor_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use pms_core::domain::{Gender, IdProofType, Labor};
use pms_core::error::DomainError;
use pms_core::repositories::LaborRepository;

const LABOR_COLUMNS: &str = r#"
    id, full_name, mobile_number, alternate_number, gender, age,
    address, city, id_proof_type, id_proof_number, profile_image,
    is_active, created_at, modified_at
"#;

pub struct PgLaborRepository {
    pool: PgPool,
}

impl PgLaborRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LaborRow {
    pub id: Uuid,
    pub full_name: String,
    pub mobile_number: String,
    pub alternate_number: Option<String>,
    pub gender: String,
    pub age: i32,
    pub address: String,
    pub city: String,
    pub id_proof_type: String,
    pub id_proof_number: String,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<LaborRow> for Labor {
    fn from(row: LaborRow) -> Self {
        Labor {
            id: row.id,
            full_name: row.full_name,
            mobile_number: row.mobile_number,
            alternate_number: row.alternate_number,
            gender: Gender::from_str(&row.gender).unwrap_or(Gender::Other),
            age: row.age,
            address: row.address,
            city: row.city,
            id_proof_type: IdProofType::from_str(&row.id_proof_type)
                .unwrap_or(IdProofType::Aadhaar),
            id_proof_number: row.id_proof_number,
            profile_image: row.profile_image,
            is_active: row.is_active,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl LaborRepository for PgLaborRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Labor>, DomainError> {
        let row: Option<LaborRow> = sqlx::query_as(&format!(
            "SELECT {LABOR_COLUMNS} FROM labors WHERE id = $1 AND is_active = TRUE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding labor by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Labor>, DomainError> {
        let rows: Vec<LaborRow> = sqlx::query_as(&format!(
            "SELECT {LABOR_COLUMNS} FROM labors WHERE is_active = TRUE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing labors: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, labor: &Labor) -> Result<Labor, DomainError> {
        let row: LaborRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO labors (
                id, full_name, mobile_number, alternate_number, gender, age,
                address, city, id_proof_type, id_proof_number, profile_image,
                is_active, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {LABOR_COLUMNS}
            "#
        ))
        .bind(labor.id)
        .bind(&labor.full_name)
        .bind(&labor.mobile_number)
        .bind(&labor.alternate_number)
        .bind(labor.gender.as_str())
        .bind(labor.age)
        .bind(&labor.address)
        .bind(&labor.city)
        .bind(labor.id_proof_type.as_str())
        .bind(&labor.id_proof_number)
        .bind(&labor.profile_image)
        .bind(labor.is_active)
        .bind(labor.created_at)
        .bind(labor.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating labor: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::IdProofAlreadyExists(labor.id_proof_number.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, labor: &Labor) -> Result<Labor, DomainError> {
        let row: LaborRow = sqlx::query_as(&format!(
            r#"
            UPDATE labors
            SET
                full_name = $2,
                mobile_number = $3,
                alternate_number = $4,
                gender = $5,
                age = $6,
                address = $7,
                city = $8,
                id_proof_type = $9,
                id_proof_number = $10,
                profile_image = $11,
                modified_at = $12
            WHERE id = $1 AND is_active = TRUE
            RETURNING {LABOR_COLUMNS}
            "#
        ))
        .bind(labor.id)
        .bind(&labor.full_name)
        .bind(&labor.mobile_number)
        .bind(&labor.alternate_number)
        .bind(labor.gender.as_str())
        .bind(labor.age)
        .bind(&labor.address)
        .bind(&labor.city)
        .bind(labor.id_proof_type.as_str())
        .bind(&labor.id_proof_number)
        .bind(&labor.profile_image)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating labor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::LaborNotFound)?;

        Ok(row.into())
    }

    async fn deactivate(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE labors SET is_active = FALSE, modified_at = NOW() WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deactivating labor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LaborNotFound);
        }
        Ok(())
    }
}
