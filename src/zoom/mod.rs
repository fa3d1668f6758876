//! Client for the Zoom server-to-server OAuth and meetings APIs

pub mod meetings;
pub mod oauth;

use std::fmt;

use thiserror::Error;

pub use meetings::{MeetingRequest, create_meeting, field_text, join_url};
pub use oauth::acquire_token;

#[derive(Debug, Error)]
pub enum ZoomError {
    /// Exchanging the account credentials for a token failed
    #[error("Zoom authentication failed: {0}")]
    Auth(String),
    /// Meeting creation was rejected or the API was unreachable
    #[error("Zoom meeting creation failed: {0}")]
    Provider(String),
}

/// Short-lived bearer token. Fetched per meeting and never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
