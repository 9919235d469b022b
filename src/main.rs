//! Todo Reminder MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo reminder server application.
//! The actual implementation is in the `todo_reminder` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_reminder::{Config, TodoServerHandler, logging};
use tracing::info;

/// Todo Reminder MCP Server - categorized todo list with due-time desktop reminders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file (defaults apply when missing)
    #[arg(default_value = "todo-reminder.toml")]
    config: PathBuf,

    /// Seconds between reminder scans (overrides the config file)
    #[arg(long)]
    scan_interval: Option<u64>,

    /// Minutes before the due time a reminder fires (overrides the config file)
    #[arg(long)]
    lead_minutes: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(secs) = args.scan_interval {
        config.reminders.scan_interval_secs = secs;
    }
    if let Some(minutes) = args.lead_minutes {
        config.reminders.lead_minutes = minutes;
    }
    config.validate()?;

    logging::init(&config.logging.filter)?;
    info!(config = %args.config.display(), "todo-reminder starting");

    let handler = TodoServerHandler::from_config(&config);
    handler.mount();
    serve_stdio(handler).await?;

    info!("todo-reminder shut down");
    Ok(())
}
