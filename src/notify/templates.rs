//! Email templates using Handlebars. Every value interpolated with
//! `{{ }}` is HTML-escaped, which matters because the topic and name
//! come straight from the caller.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use handlebars::Handlebars;
use serde::Serialize;

use super::{EmailMessage, JoinLinkDetails, NotificationError};

#[derive(Debug)]
pub enum Template {
    JoinLink,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const JOIN_LINK_HTML: &str = r#"
<div style="font-family:Arial,sans-serif;padding:20px;border:1px solid #eee;border-radius:10px;max-width:600px;margin:auto">
  <h2 style="color:#4CAF50;">🌟 Hello {{name}},</h2>
  <p>You're booked for a coaching session titled <strong>{{topic}}</strong>.</p>
  <p><strong>Date & Time:</strong> {{session_time}} ({{timezone}})</p>
  <p><strong>Zoom Link:</strong> <a href="{{join_url}}" target="_blank">{{join_url}}</a></p>
  <p style="margin-top:30px;">See you soon!<br/><strong>{{sender_name}}</strong></p>
</div>
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Template::JoinLink.to_string(), JOIN_LINK_HTML)
        .expect("Failed to register template");
    registry
}

#[derive(Serialize)]
struct JoinLinkContext<'a> {
    name: &'a str,
    topic: &'a str,
    session_time: String,
    timezone: &'a str,
    join_url: &'a str,
    sender_name: &'a str,
}

/// Render the confirmation email carrying the meeting's join link.
pub fn render_join_link_email(
    details: &JoinLinkDetails,
    sender_name: &str,
) -> Result<EmailMessage, NotificationError> {
    let registry = templates();
    let context = JoinLinkContext {
        name: &details.name,
        topic: &details.topic,
        session_time: format_session_time(&details.start_time, &details.timezone),
        timezone: &details.timezone,
        join_url: &details.join_url,
        sender_name,
    };

    let html = registry.render(&Template::JoinLink.to_string(), &context)?;

    // Plain header text, no escaping
    Ok(EmailMessage {
        to: details.to.clone(),
        subject: format!("Zoom Link for Your Session: {}", details.topic),
        html,
    })
}

/// Render the start time in the requested IANA zone the way a US
/// locale would, e.g. `6/1/2024, 10:00:00 AM`. A start time without an
/// offset is read as wall-clock time in that zone. Anything that can't
/// be interpreted is shown as given.
pub fn format_session_time(start_time: &str, timezone: &str) -> String {
    let Ok(tz) = timezone.parse::<Tz>() else {
        tracing::warn!("Unknown timezone {}, showing start time as given", timezone);
        return start_time.to_string();
    };

    let instant = if let Ok(dt) = DateTime::parse_from_rfc3339(start_time) {
        dt.with_timezone(&Utc)
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S") {
        match tz.from_local_datetime(&naive).earliest() {
            Some(local) => local.with_timezone(&Utc),
            None => return start_time.to_string(),
        }
    } else {
        tracing::warn!("Unparseable start time {}, showing as given", start_time);
        return start_time.to_string();
    };

    instant
        .with_timezone(&tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> JoinLinkDetails {
        JoinLinkDetails {
            to: "a@b.com".to_string(),
            name: "Alex".to_string(),
            topic: "Intro Call".to_string(),
            join_url: "https://zoom.us/j/123".to_string(),
            start_time: "2024-06-01T10:00:00Z".to_string(),
            timezone: "UTC".to_string(),
        }
    }

    #[test]
    fn test_format_session_time() {
        assert_eq!(
            format_session_time("2024-06-01T10:00:00Z", "UTC"),
            "6/1/2024, 10:00:00 AM"
        );
        assert_eq!(
            format_session_time("2024-06-01T10:00:00Z", "America/New_York"),
            "6/1/2024, 6:00:00 AM"
        );
        assert_eq!(
            format_session_time("2024-12-31T23:30:00+00:00", "Asia/Tokyo"),
            "1/1/2025, 8:30:00 AM"
        );
    }

    #[test]
    fn test_format_session_time_naive_is_local() {
        assert_eq!(
            format_session_time("2024-06-01T15:45:00", "Europe/Berlin"),
            "6/1/2024, 3:45:00 PM"
        );
    }

    #[test]
    fn test_format_session_time_fallback() {
        assert_eq!(format_session_time("tomorrow", "UTC"), "tomorrow");
        assert_eq!(
            format_session_time("2024-06-01T10:00:00Z", "Mars/Olympus"),
            "2024-06-01T10:00:00Z"
        );
    }

    #[test]
    fn test_render_join_link_email() {
        let email = render_join_link_email(&details(), "Coach Asmaa").unwrap();

        assert_eq!(email.to, "a@b.com");
        assert_eq!(email.subject, "Zoom Link for Your Session: Intro Call");
        assert!(email.html.contains("Hello Alex,"));
        assert!(email.html.contains(r#"<a href="https://zoom.us/j/123" target="_blank">https://zoom.us/j/123</a>"#));
        assert!(email.html.contains("6/1/2024, 10:00:00 AM (UTC)"));
        assert!(email.html.contains("<strong>Coach Asmaa</strong>"));
    }

    #[test]
    fn test_render_escapes_caller_input() {
        let mut details = details();
        details.name = "<script>alert(1)</script>".to_string();
        details.topic = "Q&A".to_string();

        let email = render_join_link_email(&details, "Coach Asmaa").unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
        assert!(email.html.contains("Q&amp;A"));
        assert_eq!(email.subject, "Zoom Link for Your Session: Q&A");
    }
}
