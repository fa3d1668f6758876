//! Scheduling a meeting end to end: token, meeting, then an optional
//! confirmation email. Only the first two steps can fail the request.

use serde_json::Value;

use crate::core::AppConfig;
use crate::notify::{Delivery, JoinLinkDetails, Mailer, send_join_link_email};
use crate::zoom::{self, MeetingRequest, ZoomError};

#[derive(Clone, Debug, Default)]
pub struct ScheduleRequest {
    pub meeting: MeetingRequest,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Skipped,
    Attempted(Delivery),
}

#[derive(Debug)]
pub struct Scheduled {
    /// Zoom's meeting resource, passed through as received
    pub meeting: Value,
    pub notification: Notification,
}

/// Both the address and the display name are required to send the
/// email. Values are trimmed first, so whitespace-only strings like
/// `" "` count as missing too.
pub fn recipient<'a>(email: Option<&'a str>, name: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    let email = email.map(str::trim).filter(|e| !e.is_empty())?;
    let name = name.map(str::trim).filter(|n| !n.is_empty())?;
    Some((email, name))
}

pub async fn schedule_meeting(
    config: &AppConfig,
    mailer: &dyn Mailer,
    request: &ScheduleRequest,
) -> Result<Scheduled, ZoomError> {
    let token = zoom::acquire_token(&config.zoom, &config.zoom_oauth_url).await?;
    let meeting = zoom::create_meeting(&token, &config.zoom_api_url, &request.meeting).await?;

    let notification = match recipient(
        request.recipient_email.as_deref(),
        request.recipient_name.as_deref(),
    ) {
        None => {
            tracing::debug!("No recipient email and name, skipping notification");
            Notification::Skipped
        }
        Some((to, name)) => match zoom::join_url(&meeting) {
            None => {
                tracing::warn!("Meeting response has no join_url, not emailing {}", to);
                Notification::Skipped
            }
            Some(join_url) => {
                let details = JoinLinkDetails {
                    to: to.to_string(),
                    name: name.to_string(),
                    topic: zoom::field_text(request.meeting.topic.as_ref()),
                    join_url: join_url.to_string(),
                    start_time: zoom::field_text(request.meeting.start_time.as_ref()),
                    timezone: zoom::field_text(request.meeting.timezone.as_ref()),
                };
                let delivery =
                    send_join_link_email(mailer, &details, &config.mail.sender_name).await;
                Notification::Attempted(delivery)
            }
        },
    };

    Ok(Scheduled {
        meeting,
        notification,
    })
}
