//! Admin account entity (identity store)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    #[default]
    Subadmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Subadmin => "subadmin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "subadmin" => Some(Self::Subadmin),
            _ => None,
        }
    }
}

/// Operator account. Hard-deleted on removal, unlike catalog entities.
///
/// The password hash and reset-token state never leave the service; they are
/// skipped on serialization.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub id: Uuid,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    pub role: AdminRole,

    #[serde(skip_serializing)]
    pub reset_token_hash: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token_expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl AdminAccount {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        mobile_number: String,
        address: String,
        role: AdminRole,
    ) -> Result<Self, validator::ValidationErrors> {
        let account = Self {
            id: Uuid::new_v4(),
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            mobile_number: mobile_number.trim().to_string(),
            address: address.trim().to_string(),
            role,
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: Utc::now(),
            modified_at: None,
        };
        account.validate()?;
        Ok(account)
    }

    pub fn is_admin(&self) -> bool {
        self.role == AdminRole::Admin
    }

    pub fn set_reset_token(&mut self, token_hash: String, expires_at: DateTime<Utc>) {
        self.reset_token_hash = Some(token_hash);
        self.reset_token_expires_at = Some(expires_at);
        self.modified_at = Some(Utc::now());
    }

    pub fn clear_reset_token(&mut self) {
        self.reset_token_hash = None;
        self.reset_token_expires_at = None;
        self.modified_at = Some(Utc::now());
    }

    pub fn reset_token_expired(&self, now: DateTime<Utc>) -> bool {
        match self.reset_token_expires_at {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account() {
        let account = AdminAccount::new(
            "operator".into(),
            "Operator@Example.com".into(),
            "hash".into(),
            "9000000001".into(),
            "12 MG Road, Pune".into(),
            AdminRole::Subadmin,
        )
        .unwrap();
        assert_eq!(account.email, "operator@example.com");
        assert!(!account.is_admin());
    }

    #[test]
    fn test_reset_token_expiry() {
        let mut account = AdminAccount::new(
            "operator".into(),
            "operator@example.com".into(),
            "hash".into(),
            "9000000001".into(),
            "12 MG Road, Pune".into(),
            AdminRole::Admin,
        )
        .unwrap();

        let now = Utc::now();
        assert!(account.reset_token_expired(now));

        account.set_reset_token("digest".into(), now + chrono::Duration::minutes(15));
        assert!(!account.reset_token_expired(now));
        assert!(account.reset_token_expired(now + chrono::Duration::minutes(16)));

        account.clear_reset_token();
        assert!(account.reset_token_expired(now));
    }
}
