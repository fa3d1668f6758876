use std::env;
use std::fmt;

use anyhow::{Context, Result};

pub const DEFAULT_ZOOM_OAUTH_URL: &str = "https://zoom.us/oauth/token";
pub const DEFAULT_ZOOM_API_URL: &str = "https://api.zoom.us/v2";
pub const DEFAULT_SENDER_NAME: &str = "Coach Asmaa";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "https://asmaagad.com"];

/// Server-to-server OAuth app credentials for the Zoom account.
#[derive(Clone)]
pub struct ZoomCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

impl fmt::Debug for ZoomCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct MailConfig {
    // Either a well-known service name ("gmail") or an SMTP host
    pub service: String,
    pub user: String,
    pub password: String,
    pub sender_name: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("service", &self.service)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub zoom: ZoomCredentials,
    pub zoom_oauth_url: String,
    pub zoom_api_url: String,
    pub mail: MailConfig,
    pub allowed_origins: Vec<String>,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Missing env var {}", key))
}

impl AppConfig {
    /// Build the config from the process environment. Values in a
    /// `.env` file in the working directory are loaded first but never
    /// override variables that are already set.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let zoom = ZoomCredentials {
            client_id: required("ZOOM_CLIENT_ID")?,
            client_secret: required("ZOOM_CLIENT_SECRET")?,
            account_id: required("ZOOM_ACCOUNT_ID")?,
        };
        let zoom_oauth_url =
            env::var("ZOOM_OAUTH_URL").unwrap_or_else(|_| DEFAULT_ZOOM_OAUTH_URL.to_string());
        let zoom_api_url =
            env::var("ZOOM_API_URL").unwrap_or_else(|_| DEFAULT_ZOOM_API_URL.to_string());

        let mail = MailConfig {
            service: required("EMAIL_SERVICE")?,
            user: required("EMAIL_USER")?,
            password: required("EMAIL_PASS")?,
            sender_name: env::var("EMAIL_SENDER_NAME")
                .unwrap_or_else(|_| DEFAULT_SENDER_NAME.to_string()),
        };

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_else(|_| default_origins());

        Ok(Self {
            zoom,
            zoom_oauth_url,
            zoom_api_url,
            mail,
            allowed_origins,
        })
    }
}

pub fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
