//! # Mentorly CLI
//!
//! Terminal front-end for the post editor and the mentor schedule form.

use std::sync::Arc;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod state;
mod telemetry;
mod terminal;

use cli::{Cli, Command};
use commands::Frontend;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;
use terminal::{TerminalDialog, TerminalNavigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let frontend = Frontend {
        state: AppState::new(&config, cli.offline).await?,
        dialog: Arc::new(TerminalDialog::new(cli.yes)),
        navigator: Arc::new(TerminalNavigator),
    };

    match cli.command {
        Command::EditPost {
            id,
            title,
            content,
            cancel,
        } => commands::edit_post(&frontend, id, title, content, cancel).await,
        Command::Schedule {
            email,
            day,
            time,
            mentor,
        } => commands::register_schedule(&frontend, email, day, time, mentor).await,
    }
}
