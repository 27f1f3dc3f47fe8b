// ============================================================================
// PMS Core - Authentication Service
// File: crates/pms-core/src/services/auth_service.rs
// ============================================================================
//! Credential flows for operator accounts: register, login, password change,
//! and the email-based reset loop.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use pms_security::{JwtService, PasswordError, PasswordService, ResetToken};
use pms_shared::constants::RESET_TOKEN_EXPIRY_MINUTES;
use pms_shared::utils::mask_email;

use crate::domain::{AdminAccount, AdminRole};
use crate::error::DomainError;
use crate::repositories::{AdminRepository, NotificationSender};

/// Successful login/registration: the account plus its bearer token.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub account: AdminAccount,
    pub token: String,
}

pub struct AuthService {
    accounts: Arc<dyn AdminRepository>,
    notifier: Arc<dyn NotificationSender>,
    jwt: Arc<JwtService>,
    reset_url_base: String,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AdminRepository>,
        notifier: Arc<dyn NotificationSender>,
        jwt: Arc<JwtService>,
        reset_url_base: String,
    ) -> Self {
        Self {
            accounts,
            notifier,
            jwt,
            reset_url_base,
        }
    }

    /// Register a new operator. Self-registration is always subadmin.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        mobile_number: &str,
        address: &str,
    ) -> Result<AuthResult, DomainError> {
        if [username, email, password, mobile_number, address]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(DomainError::ValidationError(
                "All fields are required".to_string(),
            ));
        }

        if self.accounts.find_by_email(email).await?.is_some() {
            warn!(
                "Registration failed: email already exists: {}",
                mask_email(email)
            );
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }

        let password_hash = hash_password(password)?;

        let account = AdminAccount::new(
            username.to_string(),
            email.to_string(),
            password_hash,
            mobile_number.to_string(),
            address.to_string(),
            AdminRole::Subadmin,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let created = self.accounts.create(&account).await?;
        let token = self.issue_token(&created)?;

        info!("Registration successful for: {}", mask_email(email));
        Ok(AuthResult {
            account: created,
            token,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, DomainError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let password_valid = PasswordService::verify(password, &account.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.issue_token(&account)?;

        info!("Login successful for: {}", mask_email(email));
        Ok(AuthResult { account, token })
    }

    pub async fn change_password(
        &self,
        account_id: &Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(DomainError::ValidationError(
                "All fields are required".to_string(),
            ));
        }

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::AccountNotFound)?;

        let current_ok = PasswordService::verify(current_password, &account.password_hash)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
        if !current_ok {
            return Err(DomainError::ValidationError(
                "Current password is incorrect".to_string(),
            ));
        }

        let mut updated = account;
        updated.password_hash = hash_password(new_password)?;
        updated.modified_at = Some(Utc::now());
        self.accounts.update(&updated).await?;

        info!("Password updated for account: {}", account_id);
        Ok(())
    }

    /// Store a hashed reset token on the account and mail the raw token.
    pub async fn forgot_password(&self, email: &str) -> Result<(), DomainError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(DomainError::AccountNotFound)?;

        let token = ResetToken::generate();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_EXPIRY_MINUTES);

        let mut updated = account;
        updated.set_reset_token(token.hash.clone(), expires_at);
        self.accounts.update(&updated).await?;

        let reset_url = format!("{}/{}", self.reset_url_base.trim_end_matches('/'), token.raw);
        self.notifier
            .send_password_reset(&updated.email, &updated.username, &reset_url)
            .await?;

        info!("Reset email queued for: {}", mask_email(email));
        Ok(())
    }

    pub async fn reset_password(
        &self,
        raw_token: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let token_hash = ResetToken::hash_of(raw_token);
        let account = self
            .accounts
            .find_by_reset_token_hash(&token_hash)
            .await?
            .ok_or(DomainError::InvalidResetToken)?;

        if account.reset_token_expired(Utc::now()) {
            return Err(DomainError::InvalidResetToken);
        }

        let mut updated = account;
        updated.password_hash = hash_password(new_password)?;
        updated.clear_reset_token();
        self.accounts.update(&updated).await?;

        info!("Password reset completed for account: {}", updated.id);
        Ok(())
    }

    fn issue_token(&self, account: &AdminAccount) -> Result<String, DomainError> {
        self.jwt
            .generate_token(&account.id, account.role.as_str())
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))
    }
}

fn hash_password(password: &str) -> Result<String, DomainError> {
    PasswordService::hash(password).map_err(|e| match e {
        PasswordError::TooShort | PasswordError::TooLong => {
            DomainError::ValidationError(e.to_string())
        }
        PasswordError::HashError(msg) => DomainError::PasswordHashError(msg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::admin_repository::MockAdminRepository;
    use crate::repositories::notification::MockNotificationSender;
    use std::sync::Mutex;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test-secret".into(), 86_400))
    }

    fn sample_account(password: &str) -> AdminAccount {
        AdminAccount::new(
            "operator".into(),
            "operator@example.com".into(),
            PasswordService::hash(password).unwrap(),
            "9000000001".into(),
            "12 MG Road, Pune".into(),
            AdminRole::Subadmin,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let mut accounts = MockAdminRepository::new();
        let existing = sample_account("password-one");
        accounts
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        accounts.expect_create().times(0);

        let svc = AuthService::new(
            Arc::new(accounts),
            Arc::new(MockNotificationSender::new()),
            jwt(),
            "http://localhost:5173/reset-password".into(),
        );

        let result = svc
            .register(
                "operator",
                "operator@example.com",
                "password-one",
                "9000000001",
                "12 MG Road",
            )
            .await;
        assert!(matches!(result, Err(DomainError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let svc = AuthService::new(
            Arc::new(MockAdminRepository::new()),
            Arc::new(MockNotificationSender::new()),
            jwt(),
            "http://localhost:5173/reset-password".into(),
        );

        let result = svc
            .register("operator", "", "password-one", "9000000001", "12 MG Road")
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut accounts = MockAdminRepository::new();
        let existing = sample_account("password-one");
        accounts
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));

        let svc = AuthService::new(
            Arc::new(accounts),
            Arc::new(MockNotificationSender::new()),
            jwt(),
            "http://localhost:5173/reset-password".into(),
        );

        let result = svc.login("operator@example.com", "wrong-password").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_issues_role_bearing_token() {
        let mut accounts = MockAdminRepository::new();
        let existing = sample_account("password-one");
        accounts
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));

        let jwt = jwt();
        let svc = AuthService::new(
            Arc::new(accounts),
            Arc::new(MockNotificationSender::new()),
            jwt.clone(),
            "http://localhost:5173/reset-password".into(),
        );

        let result = svc
            .login("operator@example.com", "password-one")
            .await
            .unwrap();
        let claims = jwt.validate_token(&result.token).unwrap();
        assert_eq!(claims.role, "subadmin");
        assert_eq!(claims.account_id(), Some(result.account.id));
    }

    #[tokio::test]
    async fn test_forgot_password_mails_matching_token() {
        let stored: Arc<Mutex<Option<AdminAccount>>> = Arc::new(Mutex::new(None));
        let mailed_url: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let mut accounts = MockAdminRepository::new();
        let existing = sample_account("password-one");
        accounts
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        let stored_clone = stored.clone();
        accounts.expect_update().returning(move |account| {
            *stored_clone.lock().unwrap() = Some(account.clone());
            Ok(account.clone())
        });

        let mut notifier = MockNotificationSender::new();
        let mailed_clone = mailed_url.clone();
        notifier
            .expect_send_password_reset()
            .times(1)
            .returning(move |_, _, url| {
                *mailed_clone.lock().unwrap() = Some(url.to_string());
                Ok(())
            });

        let svc = AuthService::new(
            Arc::new(accounts),
            Arc::new(notifier),
            jwt(),
            "http://localhost:5173/reset-password".into(),
        );

        svc.forgot_password("operator@example.com").await.unwrap();

        let account = stored.lock().unwrap().clone().unwrap();
        let url = mailed_url.lock().unwrap().clone().unwrap();
        let raw = url.rsplit('/').next().unwrap();

        // Only the digest is stored; the mailed raw token must hash to it.
        assert_eq!(
            account.reset_token_hash.as_deref(),
            Some(ResetToken::hash_of(raw).as_str())
        );
        assert!(!account.reset_token_expired(Utc::now()));
    }

    #[tokio::test]
    async fn test_reset_password_rejects_expired_token() {
        let token = ResetToken::generate();

        let mut expired = sample_account("password-one");
        expired.set_reset_token(token.hash.clone(), Utc::now() - Duration::minutes(1));

        let mut accounts = MockAdminRepository::new();
        accounts
            .expect_find_by_reset_token_hash()
            .returning(move |_| Ok(Some(expired.clone())));
        accounts.expect_update().times(0);

        let svc = AuthService::new(
            Arc::new(accounts),
            Arc::new(MockNotificationSender::new()),
            jwt(),
            "http://localhost:5173/reset-password".into(),
        );

        let result = svc.reset_password(&token.raw, "new-password-1").await;
        assert!(matches!(result, Err(DomainError::InvalidResetToken)));
    }
}
