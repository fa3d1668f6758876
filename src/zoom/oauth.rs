use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde::Deserialize;

use super::{AccessToken, ZoomError};
use crate::core::ZoomCredentials;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

fn basic_credentials(credentials: &ZoomCredentials) -> String {
    let pair = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(pair))
}

/// Exchange the account credentials for a bearer token using the
/// `account_credentials` grant. There is no retry: the first failure is
/// returned to the caller.
pub async fn acquire_token(
    credentials: &ZoomCredentials,
    oauth_url: &str,
) -> Result<AccessToken, ZoomError> {
    let body = format!(
        "grant_type=account_credentials&account_id={}",
        urlencoding::encode(&credentials.account_id)
    );

    let client = Client::new();
    let res = client
        .post(oauth_url)
        .header(http::header::AUTHORIZATION, basic_credentials(credentials))
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body)
        .send()
        .await
        .map_err(|e| ZoomError::Auth(e.to_string()))?;

    let status = res.status();
    let text = res
        .text()
        .await
        .map_err(|e| ZoomError::Auth(e.to_string()))?;
    if !status.is_success() {
        return Err(ZoomError::Auth(format!("{}: {}", status, text)));
    }

    let token: TokenResponse = serde_json::from_str(&text)
        .map_err(|e| ZoomError::Auth(format!("Invalid token response: {}", e)))?;

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => {
            tracing::debug!("Acquired Zoom access token (expires in {:?}s)", token.expires_in);
            Ok(AccessToken::new(access_token))
        }
        _ => Err(ZoomError::Auth(format!(
            "Token response missing access_token: {}",
            text
        ))),
    }
}
