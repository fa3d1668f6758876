use std::sync::Arc;

use crate::core::AppConfig;
use crate::notify::Mailer;

/// Read-only state shared by every request. Nothing in here changes
/// after startup so no lock is needed.
pub struct AppState {
    pub config: AppConfig,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }
}
