//! Text views
//!
//! Pure renderers from state to plain text. The command handlers print
//! these; nothing here talks to the backend.

use std::fmt::Write;

use enloe_core::domain::channel::Channel;
use enloe_core::domain::dm::{DmChannel, DmMessage};
use enloe_core::domain::message::Message;
use enloe_core::domain::server::Server;
use enloe_core::domain::user::{AuthUser, User, avatar_initial, display_name};
use enloe_core::short_id;

use crate::layout::ChatLayout;
use crate::login::LoginForm;
use crate::session::AuthState;

/// Product name shown in titles and the default placeholder
pub const APP_NAME: &str = "EnloeChat";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn marker(active: bool) -> &'static str {
    if active { ">" } else { " " }
}

/// Top-level shell: loading, login form, or the chat layout
pub fn render_app(auth: &AuthState, form: &LoginForm, layout: &ChatLayout) -> String {
    if auth.is_loading() {
        return "Loading...\n".to_string();
    }
    if auth.is_authenticated() {
        render_layout(layout, auth.user(), auth.profile())
    } else {
        render_login(form)
    }
}

pub fn render_login(form: &LoginForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", APP_NAME);
    let subtitle = if form.is_sign_up() {
        "Create your account"
    } else {
        "Welcome back"
    };
    let _ = writeln!(out, "{}", subtitle);

    if form.is_loading {
        let _ = writeln!(out, "Please wait...");
    }
    if let Some(error) = &form.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    let toggle = if form.is_sign_up() {
        "Already have an account? Sign In (enloe auth signin)"
    } else {
        "Don't have an account? Sign Up (enloe auth signup)"
    };
    let _ = writeln!(out, "{}", toggle);
    out
}

/// The four panes of the signed-in view
pub fn render_layout(layout: &ChatLayout, user: Option<&AuthUser>, profile: Option<&User>) -> String {
    if layout.is_loading() {
        return "Loading your chat...\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "== Servers ==");
    out.push_str(&render_server_list(layout.servers(), layout.current_server()));

    if let Some(server) = layout.current_server() {
        let _ = writeln!(out, "\n== Channels ==");
        out.push_str(&render_channel_list(
            server,
            layout.channels(),
            layout.current_channel(),
        ));
    }

    let _ = writeln!(out, "\n== Chat ==");
    match layout.current_channel() {
        Some(channel) => out.push_str(&render_chat_area(channel, layout.messages())),
        None => out.push_str(&render_placeholder(layout.current_server())),
    }

    let _ = writeln!(out, "\n== You ==");
    out.push_str(&render_user_panel(user, profile));
    out
}

pub fn render_server_list(servers: &[Server], current: Option<&Server>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [@] Direct Messages", marker(current.is_none()));

    if !servers.is_empty() {
        let _ = writeln!(out, "  ---");
    }
    for server in servers {
        let active = current.is_some_and(|c| c.id == server.id);
        let _ = writeln!(
            out,
            "{} [{}] {}  ({})",
            marker(active),
            server.icon_initial(),
            server.name,
            short_id(&server.id)
        );
    }
    let _ = writeln!(out, "  [+] Add a Server");

    if servers.is_empty() {
        let _ = writeln!(out, "No servers yet");
        let _ = writeln!(out, "Create your first server");
    }
    out
}

pub fn render_channel_list(server: &Server, channels: &[Channel], current: Option<&Channel>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [+]", server.name);

    for channel in channels {
        let active = current.is_some_and(|c| c.id == channel.id);
        let _ = writeln!(
            out,
            "{} # {}  ({}, {})",
            marker(active),
            channel.name,
            channel.kind,
            short_id(&channel.id)
        );
    }

    if channels.is_empty() {
        let _ = writeln!(out, "No channels yet");
        let _ = writeln!(out, "Create your first channel");
    }
    out
}

pub fn render_chat_area(channel: &Channel, messages: &[Message]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", channel.name);
    let _ = writeln!(out, "Welcome to #{}!", channel.name);
    let _ = writeln!(out, "This is the beginning of the #{} channel.", channel.name);

    for message in messages {
        out.push_str(&render_message(message));
    }
    out
}

pub fn render_message(message: &Message) -> String {
    let edited = if message.edited_at.is_some() {
        " (edited)"
    } else {
        ""
    };
    format!(
        "[{}] {}: {}{}\n",
        message.created_at.format(TIME_FORMAT),
        message.author_name(),
        message.body(),
        edited
    )
}

/// Main pane when no channel is open
pub fn render_placeholder(server: Option<&Server>) -> String {
    let name = server.map(|s| s.name.as_str()).unwrap_or(APP_NAME);
    format!("Welcome to {}\nSelect a channel to start chatting!\n", name)
}

pub fn render_user_panel(user: Option<&AuthUser>, profile: Option<&User>) -> String {
    format!(
        "[{}] {}\n    Online\n",
        avatar_initial(user, profile),
        display_name(user, profile)
    )
}

pub fn render_dm_list(channels: &[DmChannel], me: &str) -> String {
    if channels.is_empty() {
        return "No direct messages yet\n".to_string();
    }

    let mut out = String::new();
    for channel in channels {
        let _ = writeln!(
            out,
            "  @ {}  (thread {}, since {})",
            channel.other_participant(me),
            channel.id,
            channel.created_at.format(TIME_FORMAT)
        );
    }
    out
}

/// DM messages arrive newest first; they are shown oldest first
///
/// The fetch order is trusted rather than re-sorted, so rows sharing a
/// timestamp keep their posting order.
pub fn render_dm_messages(messages: &[DmMessage]) -> String {
    let mut out = String::new();
    for message in messages.iter().rev() {
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            message.created_at.format(TIME_FORMAT),
            message.author_name(),
            message.body()
        );
    }
    out
}
