use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AccessToken, ZoomError};

/// Zoom meeting type for a scheduled, non-recurring meeting
const SCHEDULED_MEETING: u8 = 2;

/// Caller supplied meeting fields. Nothing is validated locally, Zoom is
/// the final arbiter of what it accepts, so every field is forwarded
/// verbatim whatever JSON type the caller used.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MeetingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Value>,
}

/// Text of a forwarded field for display, e.g. in the confirmation
/// email. Strings are used as is, other values as their JSON text.
pub fn field_text(field: Option<&Value>) -> String {
    match field {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MeetingSettings {
    pub join_before_host: bool,
    pub approval_type: u8,
    pub registration_type: u8,
    pub enforce_login: bool,
    pub meeting_authentication: bool,
    pub waiting_room: bool,
}

/// Settings applied to every meeting: the host must join first, no
/// registration or login, and guests wait in the waiting room.
pub const MEETING_POLICY: MeetingSettings = MeetingSettings {
    join_before_host: false,
    approval_type: 2,
    registration_type: 1,
    enforce_login: false,
    meeting_authentication: false,
    waiting_room: true,
};

#[derive(Serialize)]
struct CreateMeetingBody<'a> {
    #[serde(flatten)]
    request: &'a MeetingRequest,
    #[serde(rename = "type")]
    kind: u8,
    settings: MeetingSettings,
}

/// Create a scheduled meeting for the token's user and return Zoom's
/// response untouched.
pub async fn create_meeting(
    token: &AccessToken,
    api_url: &str,
    request: &MeetingRequest,
) -> Result<Value, ZoomError> {
    let url = format!("{}/users/me/meetings", api_url.trim_end_matches('/'));
    let body = CreateMeetingBody {
        request,
        kind: SCHEDULED_MEETING,
        settings: MEETING_POLICY,
    };

    let client = Client::new();
    let res = client
        .post(&url)
        .bearer_auth(token.as_str())
        .json(&body)
        .send()
        .await
        .map_err(|e| ZoomError::Provider(e.to_string()))?;

    let status = res.status();
    let text = res
        .text()
        .await
        .map_err(|e| ZoomError::Provider(e.to_string()))?;
    if !status.is_success() {
        return Err(ZoomError::Provider(format!("{}: {}", status, text)));
    }

    let meeting: Value = serde_json::from_str(&text)
        .map_err(|e| ZoomError::Provider(format!("Invalid meeting response: {}", e)))?;
    tracing::info!(
        "Created Zoom meeting {}",
        meeting.get("id").map(|id| id.to_string()).unwrap_or_default()
    );

    Ok(meeting)
}

/// The join link from a meeting response, if Zoom returned one.
pub fn join_url(meeting: &Value) -> Option<&str> {
    meeting
        .get("join_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}
