//! Message command handlers
//!
//! Reading, posting and deleting channel messages. Posting an image uploads
//! it first and sends its URL.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::*;
use enloe_client::DEFAULT_MESSAGE_LIMIT;
use enloe_core::domain::message::MessageType;
use enloe_core::dto::message::NewMessage;
use std::path::PathBuf;

use crate::commands::{SignedIn, require_sign_in, surfaced};
use crate::config::Config;
use crate::views;

/// Message subcommands
#[derive(Subcommand)]
pub enum MessageCommands {
    /// Show the latest messages of a channel
    List {
        /// Channel ID
        #[arg(short, long)]
        channel: String,

        #[arg(short, long, default_value_t = DEFAULT_MESSAGE_LIMIT)]
        limit: usize,
    },
    /// Post a message to a channel
    Send {
        /// Channel ID
        #[arg(short, long)]
        channel: String,

        #[command(flatten)]
        body: MessageBody,
    },
    /// Delete a message
    Delete {
        /// Message ID
        id: String,
    },
}

/// Text and/or image of an outgoing message
#[derive(Args)]
pub struct MessageBody {
    /// Message text
    #[arg(short = 't', long)]
    pub content: Option<String>,

    /// Image to upload and attach
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

impl MessageBody {
    /// Upload the image, if any, and return the content, type and file URL to send
    pub async fn prepare(
        self,
        session: &SignedIn,
        config: &Config,
    ) -> Result<(Option<String>, MessageType, Option<String>)> {
        let content = self.content.filter(|c| !c.trim().is_empty());

        match self.image {
            Some(path) => {
                let url = session
                    .client
                    .upload_image(&config.bucket, &path)
                    .await
                    .map_err(surfaced)?;
                Ok((content, MessageType::Image, Some(url)))
            }
            None if content.is_some() => Ok((content, MessageType::Text, None)),
            None => bail!("Nothing to send: pass --content or --image"),
        }
    }
}

/// Handle message commands
pub async fn handle_message_command(command: MessageCommands, config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;

    match command {
        MessageCommands::List { channel, limit } => {
            let mut messages = session
                .client
                .get_channel_messages(&channel, limit)
                .await
                .map_err(surfaced)?;
            // Newest first on the wire
            messages.reverse();

            if messages.is_empty() {
                println!("{}", "No messages yet.".yellow());
            }
            for message in &messages {
                print!("{}", views::render_message(message));
            }
            Ok(())
        }
        MessageCommands::Send { channel, body } => {
            let (content, message_type, file_url) = body.prepare(&session, config).await?;
            let message = session
                .client
                .send_message(NewMessage {
                    channel_id: channel,
                    user_id: session.user()?.id.clone(),
                    content,
                    message_type,
                    file_url,
                })
                .await
                .map_err(surfaced)?;

            println!("{} ({})", "Sent.".green(), message.id.dimmed());
            Ok(())
        }
        MessageCommands::Delete { id } => {
            session.client.delete_message(&id).await.map_err(surfaced)?;
            println!("{}", "Deleted.".green());
            Ok(())
        }
    }
}
