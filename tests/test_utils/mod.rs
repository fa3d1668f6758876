//! Test utilities for integration tests
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};

use zoom_scheduler::api::AppState;
use zoom_scheduler::api::app;
use zoom_scheduler::core::{AppConfig, MailConfig, ZoomCredentials, default_origins};
use zoom_scheduler::notify::{EmailMessage, Mailer, NotificationError};

/// Mailer that records every email instead of sending it. When
/// `failing` is set every send errors out like an unreachable SMTP
/// server would.
#[derive(Default)]
pub struct RecordingMailer {
    pub failing: bool,
    pub attempts: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> Vec<EmailMessage> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: EmailMessage) -> Result<(), NotificationError> {
        self.attempts.lock().unwrap().push(email);
        if self.failing {
            return Err(NotificationError::SendFailed(
                "Connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

/// Creates a test application router whose Zoom endpoints point at
/// `zoom_url` (usually a `mockito` server).
pub fn test_app(zoom_url: &str, mailer: Arc<RecordingMailer>) -> Router {
    let app_config = AppConfig {
        zoom: ZoomCredentials {
            client_id: String::from("test_client_id"),
            client_secret: String::from("test_client_secret"),
            account_id: String::from("test_account_id"),
        },
        zoom_oauth_url: format!("{}/oauth/token", zoom_url),
        zoom_api_url: String::from(zoom_url),
        mail: MailConfig {
            service: String::from("gmail"),
            user: String::from("coach@example.com"),
            password: String::from("test_password"),
            sender_name: String::from("Coach Asmaa"),
        },
        allowed_origins: default_origins(),
    };
    let app_state = AppState::new(app_config, mailer);
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
