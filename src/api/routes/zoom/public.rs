//! Public types for the Zoom API
use serde::Deserialize;
use serde_json::Value;

use crate::pipeline::ScheduleRequest;
use crate::zoom::MeetingRequest;

/// Body of `POST /api/zoom/create-meeting`
#[derive(Debug, Deserialize)]
pub struct CreateMeetingRequest {
    #[serde(flatten)]
    pub meeting: MeetingRequest,
    // Any JSON is accepted, only strings can address an email
    #[serde(rename = "userEmail")]
    pub user_email: Option<Value>,
    #[serde(rename = "userName")]
    pub user_name: Option<Value>,
}

impl From<CreateMeetingRequest> for ScheduleRequest {
    fn from(body: CreateMeetingRequest) -> Self {
        Self {
            meeting: body.meeting,
            recipient_email: body.user_email.as_ref().and_then(Value::as_str).map(str::to_string),
            recipient_name: body.user_name.as_ref().and_then(Value::as_str).map(str::to_string),
        }
    }
}
