//! SMTP mailer backed by `lettre`

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::{EmailMessage, Mailer, NotificationError};
use crate::core::MailConfig;

/// How to reach a mail service's SMTP relay
#[derive(Debug, PartialEq, Eq)]
enum Relay {
    /// Implicit TLS, port 465
    Tls(&'static str),
    /// STARTTLS, port 587
    StartTls(String),
}

/// Map the well-known service names people put in `EMAIL_SERVICE` to
/// their relays. Anything else is taken to be an SMTP host.
fn resolve_relay(service: &str) -> Relay {
    match service.trim().to_lowercase().as_str() {
        "gmail" | "googlemail" => Relay::Tls("smtp.gmail.com"),
        "yahoo" => Relay::Tls("smtp.mail.yahoo.com"),
        "zoho" => Relay::Tls("smtp.zoho.com"),
        "outlook" | "outlook365" | "hotmail" => {
            Relay::StartTls("smtp-mail.outlook.com".to_string())
        }
        "icloud" => Relay::StartTls("smtp.mail.me.com".to_string()),
        _ => Relay::StartTls(service.trim().to_string()),
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, NotificationError> {
        let builder = match resolve_relay(&config.service) {
            Relay::Tls(host) => AsyncSmtpTransport::<Tokio1Executor>::relay(host),
            Relay::StartTls(host) => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host),
        }
        .map_err(|e| NotificationError::InvalidConfig(format!("SMTP relay error: {}", e)))?;

        let transport = builder
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        let from = Mailbox::new(
            Some(config.sender_name.clone()),
            config.user.parse().map_err(|e| {
                NotificationError::InvalidConfig(format!("Invalid from address: {}", e))
            })?,
        );

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: EmailMessage) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("Invalid to address: {}", e)))?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html)
            .map_err(|e| NotificationError::SendFailed(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
