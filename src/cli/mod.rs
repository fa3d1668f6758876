use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod meeting;
pub mod serve;

use crate::api::init_tracing;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, env = "PORT", default_value = "5001")]
        port: String,
    },
    /// Schedule a single meeting and print Zoom's response
    Meeting {
        #[arg(long)]
        topic: String,
        /// Start time, e.g. 2024-06-01T10:00:00Z
        #[arg(long)]
        start_time: String,
        /// Duration in minutes
        #[arg(long, default_value = "30")]
        duration: u32,
        /// IANA timezone name
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Email the join link to this address (requires --name)
        #[arg(long)]
        email: Option<String>,
        /// Recipient's display name
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Meeting {
            topic,
            start_time,
            duration,
            timezone,
            email,
            name,
        }) => {
            meeting::run(topic, start_time, duration, timezone, email, name).await?;
        }
        None => {}
    }

    Ok(())
}
