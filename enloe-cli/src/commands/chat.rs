//! Chat layout command
//!
//! Renders the signed-in view: server list, channel list, the open channel
//! and the user panel, selecting servers and channels as the app does on mount.

use anyhow::{Result, anyhow, bail};
use clap::Args;
use enloe_client::DEFAULT_MESSAGE_LIMIT;
use std::sync::Arc;

use crate::commands::resume;
use crate::config::Config;
use crate::layout::ChatLayout;
use crate::login::LoginForm;
use crate::views;

#[derive(Args)]
pub struct ChatArgs {
    /// Server to open (ID, ID prefix or name); defaults to the first one
    #[arg(short, long)]
    server: Option<String>,

    /// Channel to open (ID, ID prefix or name); defaults to the first one
    #[arg(short, long)]
    channel: Option<String>,

    /// Show the Direct Messages home instead of a server
    #[arg(long, conflicts_with_all = ["server", "channel"])]
    home: bool,

    /// Also load the open channel's latest messages
    #[arg(short, long)]
    messages: bool,
}

/// Handle the chat command
pub async fn handle_chat_command(args: ChatArgs, config: &Config) -> Result<()> {
    let session = resume(config).await?;
    let mut layout = ChatLayout::new(Arc::new(session.client.clone()));

    let Some(user) = session.auth.user() else {
        print!(
            "{}",
            views::render_app(&session.auth, &LoginForm::default(), &layout)
        );
        bail!("Not signed in. Run `enloe auth signin` first.");
    };

    layout.mount(&user.id).await;
    select(&mut layout, &args).await?;

    print!(
        "{}",
        views::render_app(&session.auth, &LoginForm::default(), &layout)
    );
    Ok(())
}

async fn select(layout: &mut ChatLayout, args: &ChatArgs) -> Result<()> {
    if args.home {
        layout.select_home();
        return Ok(());
    }

    if let Some(key) = &args.server {
        let server = layout
            .find_server(key)
            .cloned()
            .ok_or_else(|| anyhow!("No server (or more than one) matching '{}'", key))?;
        if layout.current_server().map(|s| &s.id) != Some(&server.id) {
            layout.open_server(server).await;
        }
    }

    if let Some(key) = &args.channel {
        let channel = layout
            .find_channel(key)
            .cloned()
            .ok_or_else(|| anyhow!("No channel (or more than one) matching '{}'", key))?;
        layout.select_channel(channel);
    }

    if args.messages {
        layout.load_channel_messages(DEFAULT_MESSAGE_LIMIT).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_chat_without_session_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            "http://127.0.0.1:9",
            dir.path().join("session.json"),
            "chat-images",
            Duration::from_secs(1),
        );
        let args = ChatArgs {
            server: None,
            channel: None,
            home: false,
            messages: false,
        };

        let err = handle_chat_command(args, &config).await.unwrap_err();
        assert!(err.to_string().starts_with("Not signed in"));
    }
}
