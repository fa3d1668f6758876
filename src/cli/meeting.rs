use anyhow::Result;
use serde_json::json;

use crate::core::AppConfig;
use crate::notify::SmtpMailer;
use crate::pipeline::{Notification, ScheduleRequest, schedule_meeting};
use crate::zoom::MeetingRequest;

pub async fn run(
    topic: String,
    start_time: String,
    duration: u32,
    timezone: String,
    email: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let config = AppConfig::from_env()?;
    let mailer = SmtpMailer::new(&config.mail)?;

    let request = ScheduleRequest {
        meeting: MeetingRequest {
            topic: Some(json!(topic)),
            start_time: Some(json!(start_time)),
            duration: Some(json!(duration)),
            timezone: Some(json!(timezone)),
        },
        recipient_email: email,
        recipient_name: name,
    };

    let scheduled = schedule_meeting(&config, &mailer, &request).await?;
    println!("{}", serde_json::to_string_pretty(&scheduled.meeting)?);

    if let Notification::Attempted(delivery) = scheduled.notification {
        eprintln!("Notification: {:?}", delivery);
    }

    Ok(())
}
