// ============================================================================
// PMS Infrastructure - PostgreSQL Admin Repository
// File: crates/pms-infrastructure/src/database/postgres/admin_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use pms_core::domain::{AdminAccount, AdminRole};
use pms_core::error::DomainError;
use pms_core::repositories::AdminRepository;

const ADMIN_COLUMNS: &str = r#"
    id, username, email, password_hash, mobile_number, address, role,
    reset_token_hash, reset_token_expires_at, created_at, modified_at
"#;

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub mobile_number: String,
    pub address: String,
    pub role: String,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<AdminRow> for AdminAccount {
    fn from(row: AdminRow) -> Self {
        AdminAccount {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            mobile_number: row.mobile_number,
            address: row.address,
            role: AdminRole::from_str(&row.role).unwrap_or_default(),
            reset_token_hash: row.reset_token_hash,
            reset_token_expires_at: row.reset_token_expires_at,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminAccount>, DomainError> {
        let row: Option<AdminRow> = sqlx::query_as(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin_accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, DomainError> {
        let row: Option<AdminRow> = sqlx::query_as(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin_accounts WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminAccount>, DomainError> {
        let row: Option<AdminRow> = sqlx::query_as(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin_accounts WHERE reset_token_hash = $1"
        ))
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account by reset token: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<AdminAccount>, DomainError> {
        let rows: Vec<AdminRow> = sqlx::query_as(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin_accounts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing accounts: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, account: &AdminAccount) -> Result<AdminAccount, DomainError> {
        info!("Creating account with email: {}", account.email);

        let row: AdminRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO admin_accounts (
                id, username, email, password_hash, mobile_number, address, role,
                reset_token_hash, reset_token_expires_at, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ADMIN_COLUMNS}
            "#
        ))
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.mobile_number)
        .bind(&account.address)
        .bind(account.role.as_str())
        .bind(&account.reset_token_hash)
        .bind(account.reset_token_expires_at)
        .bind(account.created_at)
        .bind(account.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating account: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::EmailAlreadyExists(account.email.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, account: &AdminAccount) -> Result<AdminAccount, DomainError> {
        let row: AdminRow = sqlx::query_as(&format!(
            r#"
            UPDATE admin_accounts
            SET
                username = $2,
                email = $3,
                password_hash = $4,
                mobile_number = $5,
                address = $6,
                role = $7,
                reset_token_hash = $8,
                reset_token_expires_at = $9,
                modified_at = $10
            WHERE id = $1
            RETURNING {ADMIN_COLUMNS}
            "#
        ))
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.mobile_number)
        .bind(&account.address)
        .bind(account.role.as_str())
        .bind(&account.reset_token_hash)
        .bind(account.reset_token_expires_at)
        .bind(account.modified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating account: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::AccountNotFound)?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        // Accounts are removed outright; there is no soft-delete here.
        let result = sqlx::query("DELETE FROM admin_accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting account: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AccountNotFound);
        }
        Ok(())
    }
}
