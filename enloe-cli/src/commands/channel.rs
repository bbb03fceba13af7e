//! Channel command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use enloe_core::domain::channel::ChannelKind;
use enloe_core::dto::channel::NewChannel;

use crate::commands::server::resolve_server;
use crate::commands::{require_sign_in, surfaced};
use crate::config::Config;

/// Channel subcommands
#[derive(Subcommand)]
pub enum ChannelCommands {
    /// Create a channel in one of your servers
    Create {
        /// Server ID, ID prefix or name
        #[arg(short, long)]
        server: String,

        #[arg(short, long)]
        name: String,

        /// text or voice
        #[arg(short, long, default_value = "text")]
        kind: ChannelKind,
    },
}

/// Handle channel commands
pub async fn handle_channel_command(command: ChannelCommands, config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;

    match command {
        ChannelCommands::Create { server, name, kind } => {
            let server = resolve_server(&session, &server).await?;
            let channel = session
                .client
                .create_channel(NewChannel {
                    server_id: server.id.clone(),
                    name: name.trim().to_string(),
                    kind,
                })
                .await
                .map_err(surfaced)?;

            println!(
                "{} #{} in {} ({})",
                "Created channel".green().bold(),
                channel.name.bold(),
                server.name,
                channel.id
            );
            Ok(())
        }
    }
}
