//! Router for the Zoom API

use std::sync::Arc;

use axum::{Router, extract::State, response::Json};
use serde_json::Value;

use super::public;
use crate::api::state::AppState;
use crate::pipeline::{ScheduleRequest, schedule_meeting};

type SharedState = Arc<AppState>;

async fn create_meeting_handler(
    State(state): State<SharedState>,
    Json(body): Json<public::CreateMeetingRequest>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let request = ScheduleRequest::from(body);
    let scheduled = schedule_meeting(&state.config, state.mailer.as_ref(), &request).await?;
    tracing::debug!("Notification: {:?}", scheduled.notification);

    Ok(Json(scheduled.meeting))
}

/// Create the Zoom router
pub fn router() -> Router<SharedState> {
    Router::new().route("/create-meeting", axum::routing::post(create_meeting_handler))
}
