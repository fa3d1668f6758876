use anyhow::Result;
use zoom_scheduler::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
