//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod auth;
mod channel;
mod chat;
mod dm;
mod message;
mod server;

pub use auth::AuthCommands;
pub use channel::ChannelCommands;
pub use chat::ChatArgs;
pub use dm::DmCommands;
pub use message::MessageCommands;
pub use server::ServerCommands;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use enloe_client::EnloeClient;
use enloe_core::domain::user::AuthUser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::login::LoginForm;
use crate::session::AuthState;
use crate::store::SessionStore;
use crate::views;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sign up, sign in, sign out and manage your profile
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Server management
    Server {
        #[command(subcommand)]
        command: ServerCommands,
    },
    /// Channel management
    Channel {
        #[command(subcommand)]
        command: ChannelCommands,
    },
    /// Channel messages
    Message {
        #[command(subcommand)]
        command: MessageCommands,
    },
    /// Direct messages
    Dm {
        #[command(subcommand)]
        command: DmCommands,
    },
    /// Upload an image and print its URL
    Upload {
        /// Path to the image file
        path: PathBuf,
    },
    /// Show the chat layout
    Chat(ChatArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Auth { command } => auth::handle_auth_command(command, config).await,
        Commands::Server { command } => server::handle_server_command(command, config).await,
        Commands::Channel { command } => channel::handle_channel_command(command, config).await,
        Commands::Message { command } => message::handle_message_command(command, config).await,
        Commands::Dm { command } => dm::handle_dm_command(command, config).await,
        Commands::Upload { path } => upload(&path, config).await,
        Commands::Chat(args) => chat::handle_chat_command(args, config).await,
    }
}

/// Backend client plus the resumed auth state of the saved session
pub struct SignedIn {
    pub client: EnloeClient,
    pub auth: AuthState,
}

impl SignedIn {
    /// The signed-in identity
    pub fn user(&self) -> Result<&AuthUser> {
        match self.auth.user() {
            Some(user) => Ok(user),
            None => bail!("Not signed in"),
        }
    }
}

/// Resume the saved session, if any
///
/// The returned state is initialized; it is signed out when there was no
/// saved session or the backend no longer accepts its token.
pub async fn resume(config: &Config) -> Result<SignedIn> {
    let client = config.client()?;
    let store = SessionStore::new(&config.session_file);

    if let Some(saved) = store.load()? {
        client.set_access_token(saved.access_token);
    }

    let mut auth = AuthState::new(Arc::new(client.clone()));
    auth.initialize().await;
    Ok(SignedIn { client, auth })
}

/// Resume the saved session and insist on a signed-in user
///
/// Prints the login view when nobody is signed in.
pub async fn require_sign_in(config: &Config) -> Result<SignedIn> {
    let session = resume(config).await?;
    if !session.auth.is_authenticated() {
        print!("{}", views::render_login(&LoginForm::default()));
        bail!("Not signed in. Run `enloe auth signin` first.");
    }
    Ok(session)
}

/// Turn a client error into the message the backend gave, unchanged
pub fn surfaced(error: enloe_client::ClientError) -> anyhow::Error {
    anyhow::anyhow!(error.user_message())
}

async fn upload(path: &std::path::Path, config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;
    let url = session
        .client
        .upload_image(&config.bucket, path)
        .await
        .map_err(surfaced)?;

    println!("{} {}", "Uploaded:".green().bold(), url);
    Ok(())
}
