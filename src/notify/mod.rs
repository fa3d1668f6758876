//! Best-effort email notifications for scheduled meetings

mod smtp;
pub mod templates;

pub use smtp::SmtpMailer;
pub use templates::{format_session_time, render_join_link_email};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to render email: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Invalid mail configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Anything that can deliver a single HTML email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: EmailMessage) -> Result<(), NotificationError>;
}

#[derive(Clone, Debug)]
pub struct JoinLinkDetails {
    pub to: String,
    pub name: String,
    pub topic: String,
    pub join_url: String,
    pub start_time: String,
    pub timezone: String,
}

/// Outcome of a notification attempt. Failures have already been
/// logged so callers are free to ignore this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed(String),
}

/// Render and send the join link email. Never fails: any error is
/// logged and reported as `Delivery::Failed`.
pub async fn send_join_link_email(
    mailer: &dyn Mailer,
    details: &JoinLinkDetails,
    sender_name: &str,
) -> Delivery {
    let result = match render_join_link_email(details, sender_name) {
        Ok(email) => mailer.send(email).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            tracing::info!("Email sent successfully to {}", details.to);
            Delivery::Sent
        }
        Err(e) => {
            tracing::error!("Failed to send email to {}: {}", details.to, e);
            Delivery::Failed(e.to_string())
        }
    }
}
