//! Server command handlers
//!
//! Listing, creating, joining and leaving servers, and listing a server's
//! channels.

use anyhow::{Result, anyhow};
use clap::Subcommand;
use colored::*;
use enloe_core::domain::server::Server;
use enloe_core::dto::server::NewServer;
use enloe_core::short_id;

use crate::commands::{SignedIn, require_sign_in, surfaced};
use crate::config::Config;
use crate::layout::find_server;
use crate::views;

/// Server subcommands
#[derive(Subcommand)]
pub enum ServerCommands {
    /// List the servers you are a member of
    List,
    /// Create a server; you become its admin
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Join a server by ID
    Join {
        /// Server ID
        id: String,
    },
    /// Leave a server
    Leave {
        /// Server ID, ID prefix or name
        server: String,
    },
    /// List a server's channels
    Channels {
        /// Server ID, ID prefix or name
        server: String,
    },
}

/// Handle server commands
pub async fn handle_server_command(command: ServerCommands, config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;

    match command {
        ServerCommands::List => list_servers(&session).await,
        ServerCommands::Create { name, description } => {
            create_server(&session, name, description).await
        }
        ServerCommands::Join { id } => join_server(&session, &id).await,
        ServerCommands::Leave { server } => leave_server(&session, &server).await,
        ServerCommands::Channels { server } => list_channels(&session, &server).await,
    }
}

/// Resolve a server argument against the user's servers
pub async fn resolve_server(session: &SignedIn, key: &str) -> Result<Server> {
    let servers = session
        .client
        .get_user_servers(&session.user()?.id)
        .await
        .map_err(surfaced)?;

    find_server(&servers, key).cloned().ok_or_else(|| {
        anyhow!(
            "No server (or more than one) matching '{}'. Run `enloe server list` to see your servers.",
            key
        )
    })
}

async fn list_servers(session: &SignedIn) -> Result<()> {
    let servers = session
        .client
        .get_user_servers(&session.user()?.id)
        .await
        .map_err(surfaced)?;

    print!("{}", views::render_server_list(&servers, None));
    for server in &servers {
        if let Some(description) = &server.description {
            println!("  {} {}", short_id(&server.id).dimmed(), description);
        }
    }
    Ok(())
}

async fn create_server(
    session: &SignedIn,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let server = session
        .client
        .create_server(NewServer {
            name: name.trim().to_string(),
            description,
            owner_id: session.user()?.id.clone(),
        })
        .await
        .map_err(surfaced)?;

    println!(
        "{} {} ({})",
        "Created server".green().bold(),
        server.name.bold(),
        server.id
    );
    Ok(())
}

async fn join_server(session: &SignedIn, server_id: &str) -> Result<()> {
    let member = session
        .client
        .join_server(server_id, &session.user()?.id)
        .await
        .map_err(surfaced)?;

    println!(
        "{} {} as {}",
        "Joined server".green().bold(),
        member.server_id,
        member.role
    );
    Ok(())
}

async fn leave_server(session: &SignedIn, key: &str) -> Result<()> {
    let server = resolve_server(session, key).await?;
    session
        .client
        .leave_server(&server.id, &session.user()?.id)
        .await
        .map_err(surfaced)?;

    println!("{} {}", "Left server".green(), server.name.bold());
    Ok(())
}

async fn list_channels(session: &SignedIn, key: &str) -> Result<()> {
    let server = resolve_server(session, key).await?;
    let channels = session
        .client
        .get_server_channels(&server.id)
        .await
        .map_err(surfaced)?;

    print!("{}", views::render_channel_list(&server, &channels, None));
    Ok(())
}
