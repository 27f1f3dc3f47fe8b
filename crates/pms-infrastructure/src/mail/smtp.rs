//! SMTP notification sender

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use pms_core::error::DomainError;
use pms_core::repositories::NotificationSender;
use pms_shared::config::MailSettings;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| DomainError::MailError(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        let address: Address = settings
            .from_address
            .parse()
            .map_err(|e| DomainError::MailError(format!("Invalid from address: {e}")))?;
        let from = Mailbox::new(Some(settings.from_name.clone()), address);

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl NotificationSender for SmtpMailer {
    async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_url: &str,
    ) -> Result<(), DomainError> {
        let recipient: Address = to
            .parse()
            .map_err(|e| DomainError::MailError(format!("Invalid recipient: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(Some(name.to_string()), recipient))
            .subject("Reset your password")
            .header(ContentType::TEXT_HTML)
            .body(format!(r#"<a href="{reset_url}">Reset Password</a>"#))
            .map_err(|e| DomainError::MailError(e.to_string()))?;

        self.transport.send(message).await.map_err(|e| {
            error!("SMTP error: {}", e);
            DomainError::MailError("Email could not be sent".to_string())
        })?;

        info!("Reset email sent to: {}", to);
        Ok(())
    }
}
