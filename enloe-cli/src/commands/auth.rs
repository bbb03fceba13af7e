//! Auth command handlers
//!
//! Sign-up, sign-in, sign-out, identity and profile edits. A successful
//! sign-in or sign-up is persisted so later commands run as that user.

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use enloe_core::dto::auth::ProfileUpdate;
use tracing::debug;

use crate::commands::{SignedIn, require_sign_in, resume};
use crate::config::Config;
use crate::login::{GENERIC_ERROR, LoginForm};
use crate::store::{SessionStore, StoredSession};
use crate::views;

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    Signup {
        #[arg(short, long)]
        email: String,

        /// At least 6 characters
        #[arg(short, long)]
        password: String,

        /// Display name, 2 to 32 characters
        #[arg(short, long)]
        nickname: String,
    },
    /// Sign in to an existing account
    Signin {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the saved session
    Signout,
    /// Show who is signed in
    Whoami,
    /// Update your profile
    Profile {
        #[arg(long)]
        nickname: Option<String>,

        #[arg(long)]
        avatar_url: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },
}

/// Handle auth commands
pub async fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    match command {
        AuthCommands::Signup {
            email,
            password,
            nickname,
        } => submit(LoginForm::sign_up(email, password, nickname), config).await,
        AuthCommands::Signin { email, password } => {
            submit(LoginForm::sign_in(email, password), config).await
        }
        AuthCommands::Signout => sign_out(config).await,
        AuthCommands::Whoami => whoami(config).await,
        AuthCommands::Profile {
            nickname,
            avatar_url,
            bio,
        } => {
            update_profile(
                ProfileUpdate {
                    nickname,
                    avatar_url,
                    bio,
                },
                config,
            )
            .await
        }
    }
}

/// Submit the login form and persist the session on success
async fn submit(mut form: LoginForm, config: &Config) -> Result<()> {
    let SignedIn { client, mut auth } = resume(config).await?;

    if !form.submit(&mut auth).await {
        print!("{}", views::render_login(&form));
        bail!(form.error.unwrap_or_default());
    }

    let (Some(user), Some(token)) = (auth.user(), client.access_token()) else {
        bail!("Signed in but no session was returned");
    };
    let store = SessionStore::new(&config.session_file);
    store.save(&StoredSession {
        access_token: token,
        user: user.clone(),
    })?;
    debug!("Session saved to {}", store.path().display());

    let verb = if form.is_sign_up() {
        "Account created."
    } else {
        "Signed in."
    };
    println!("{}", verb.green().bold());
    print!("{}", views::render_user_panel(auth.user(), auth.profile()));
    Ok(())
}

async fn sign_out(config: &Config) -> Result<()> {
    let SignedIn { mut auth, .. } = resume(config).await?;
    auth.sign_out().await;
    SessionStore::new(&config.session_file).clear()?;

    println!("{}", "Signed out.".green());
    Ok(())
}

async fn whoami(config: &Config) -> Result<()> {
    let session = require_sign_in(config).await?;
    let user = session.user()?;

    print!(
        "{}",
        views::render_user_panel(Some(user), session.auth.profile())
    );
    println!("    Email: {}", user.email.dimmed());
    println!("    Id:    {}", user.id.dimmed());
    if let Some(bio) = session.auth.profile().and_then(|p| p.bio.as_deref()) {
        println!("    Bio:   {}", bio);
    }
    Ok(())
}

async fn update_profile(update: ProfileUpdate, config: &Config) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update: pass --nickname, --avatar-url or --bio");
    }

    let mut session = require_sign_in(config).await?;
    let outcome = session.auth.update_profile(&update).await;
    if !outcome.success {
        bail!(outcome.error.unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }

    println!("{}", "Profile updated.".green());
    print!(
        "{}",
        views::render_user_panel(session.auth.user(), session.auth.profile())
    );
    Ok(())
}
