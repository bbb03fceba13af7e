//! Enloe CLI
//!
//! Terminal front end for EnloeChat: sign in, browse servers and channels,
//! read and post messages, and upload images.

mod commands;
mod config;
mod layout;
mod login;
mod session;
mod store;
#[cfg(test)]
mod testing;
mod views;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "enloe")]
#[command(about = "EnloeChat command-line client", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(long, env = "ENLOE_BASE_URL", default_value = "http://localhost:7130")]
    base_url: String,

    /// File the signed-in session is kept in
    #[arg(long, env = "ENLOE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Storage bucket for image uploads
    #[arg(long, env = "ENLOE_BUCKET", default_value = enloe_client::DEFAULT_BUCKET)]
    bucket: String,

    /// Request timeout in seconds
    #[arg(long, env = "ENLOE_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries rendered views
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enloe=warn,enloe_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(
        &cli.base_url,
        cli.session_file
            .unwrap_or_else(config::default_session_file),
        &cli.bucket,
        Duration::from_secs(cli.timeout_secs),
    );
    config.validate()?;

    handle_command(cli.command, &config).await
}
