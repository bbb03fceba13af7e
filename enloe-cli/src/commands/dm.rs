//! Direct message command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use enloe_client::DEFAULT_MESSAGE_LIMIT;
use enloe_core::dto::dm::NewDmMessage;

use crate::commands::message::MessageBody;
use crate::commands::{require_sign_in, surfaced};
use crate::config::Config;
use crate::views;

/// DM subcommands
#[derive(Subcommand)]
pub enum DmCommands {
    /// List your DM threads
    List,
    /// Open a DM thread with another user
    Open {
        /// The other user's ID
        user_id: String,
    },
    /// Show the latest messages of a DM thread
    Messages {
        /// DM thread ID
        id: String,

        #[arg(short, long, default_value_t = DEFAULT_MESSAGE_LIMIT)]
        limit: usize,
    },
    /// Send a direct message
    Send {
        /// DM thread ID
        id: String,

        #[command(flatten)]
        body: MessageBody,
    },
}

/// Handle DM commands
pub async fn handle_dm_command(command: DmCommands, config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;
    let me = session.user()?.id.clone();

    match command {
        DmCommands::List => {
            let channels = session
                .client
                .get_user_dm_channels(&me)
                .await
                .map_err(surfaced)?;
            print!("{}", views::render_dm_list(&channels, &me));
            Ok(())
        }
        DmCommands::Open { user_id } => {
            let existing = session
                .client
                .get_user_dm_channels(&me)
                .await
                .map_err(surfaced)?
                .into_iter()
                .find(|c| c.involves(&me) && c.other_participant(&me) == user_id);

            let channel = match existing {
                Some(channel) => channel,
                None => session
                    .client
                    .create_dm_channel(&me, &user_id)
                    .await
                    .map_err(surfaced)?,
            };
            println!("{} {}", "DM thread:".green().bold(), channel.id);
            Ok(())
        }
        DmCommands::Messages { id, limit } => {
            let messages = session
                .client
                .get_dm_channel_messages(&id, limit)
                .await
                .map_err(surfaced)?;

            if messages.is_empty() {
                println!("{}", "No messages yet.".yellow());
            }
            print!("{}", views::render_dm_messages(&messages));
            Ok(())
        }
        DmCommands::Send { id, body } => {
            let (content, message_type, file_url) = body.prepare(&session, config).await?;
            let message = session
                .client
                .send_dm_message(NewDmMessage {
                    dm_channel_id: id,
                    sender_id: me,
                    content,
                    message_type,
                    file_url,
                })
                .await
                .map_err(surfaced)?;

            println!("{} ({})", "Sent.".green(), message.id.dimmed());
            Ok(())
        }
    }
}
