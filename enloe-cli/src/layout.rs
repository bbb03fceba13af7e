//! Chat layout state
//!
//! Server list, channel list and the open channel. Every list reflects the
//! last successful fetch; a failed fetch is logged and leaves the previous
//! contents in place.

use std::sync::Arc;

use enloe_client::ChatBackend;
use enloe_core::domain::channel::Channel;
use enloe_core::domain::message::Message;
use enloe_core::domain::server::Server;
use tracing::error;

pub struct ChatLayout {
    backend: Arc<dyn ChatBackend>,
    servers: Vec<Server>,
    current_server: Option<Server>,
    channels: Vec<Channel>,
    current_channel: Option<Channel>,
    messages: Vec<Message>,
    is_loading: bool,
}

impl ChatLayout {
    /// New layout; loading until the first server fetch completes
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            servers: Vec::new(),
            current_server: None,
            channels: Vec::new(),
            current_channel: None,
            messages: Vec::new(),
            is_loading: true,
        }
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn current_server(&self) -> Option<&Server> {
        self.current_server.as_ref()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn current_channel(&self) -> Option<&Channel> {
        self.current_channel.as_ref()
    }

    /// Messages of the open channel, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// What the layout does on mount: load servers, then the channels of
    /// whichever server ended up selected
    pub async fn mount(&mut self, user_id: &str) {
        self.load_user_servers(user_id).await;
        if self.current_server.is_some() {
            self.load_server_channels().await;
        }
    }

    /// Fetch the user's servers; selects the first one if none is selected
    pub async fn load_user_servers(&mut self, user_id: &str) {
        match self.backend.user_servers(user_id).await {
            Ok(servers) => {
                if self.current_server.is_none() {
                    self.current_server = servers.first().cloned();
                }
                self.servers = servers;
            }
            Err(e) => error!("Failed to load servers: {}", e),
        }
        self.is_loading = false;
    }

    /// Fetch the selected server's channels; selects the first one if none is selected
    pub async fn load_server_channels(&mut self) {
        let Some(server_id) = self.current_server.as_ref().map(|s| s.id.clone()) else {
            return;
        };

        match self.backend.server_channels(&server_id).await {
            Ok(channels) => {
                if self.current_channel.is_none() {
                    self.current_channel = channels.first().cloned();
                }
                self.channels = channels;
            }
            Err(e) => error!("Failed to load channels: {}", e),
        }
    }

    /// Switch server; the channel selection is reset
    pub fn select_server(&mut self, server: Server) {
        self.current_server = Some(server);
        self.current_channel = None;
        self.messages.clear();
    }

    /// Go to the Direct Messages home; no server is selected
    pub fn select_home(&mut self) {
        self.current_server = None;
        self.current_channel = None;
        self.channels.clear();
        self.messages.clear();
    }

    /// Select a server and load its channels
    pub async fn open_server(&mut self, server: Server) {
        self.select_server(server);
        self.load_server_channels().await;
    }

    pub fn select_channel(&mut self, channel: Channel) {
        self.current_channel = Some(channel);
        self.messages.clear();
    }

    /// Fetch the newest messages of the open channel
    ///
    /// The backend answers newest first; the stored thread reads oldest first.
    pub async fn load_channel_messages(&mut self, limit: usize) {
        let Some(channel_id) = self.current_channel.as_ref().map(|c| c.id.clone()) else {
            return;
        };

        match self.backend.channel_messages(&channel_id, limit).await {
            Ok(mut messages) => {
                messages.reverse();
                self.messages = messages;
            }
            Err(e) => error!("Failed to load messages: {}", e),
        }
    }

    /// Find a loaded server by id, id prefix or case-insensitive name
    pub fn find_server(&self, key: &str) -> Option<&Server> {
        find_server(&self.servers, key)
    }

    /// Find a loaded channel by id, id prefix, name or `#name`
    pub fn find_channel(&self, key: &str) -> Option<&Channel> {
        find_channel(&self.channels, key)
    }
}

pub fn find_server<'a>(servers: &'a [Server], key: &str) -> Option<&'a Server> {
    find_by(servers, key, |s| (&s.id, &s.name))
}

pub fn find_channel<'a>(channels: &'a [Channel], key: &str) -> Option<&'a Channel> {
    let key = key.strip_prefix('#').unwrap_or(key);
    find_by(channels, key, |c| (&c.id, &c.name))
}

/// Exact id, then a unique case-insensitive name, then a unique id prefix
///
/// A name or prefix shared by several items matches nothing.
fn find_by<'a, T>(
    items: &'a [T],
    key: &str,
    fields: impl Fn(&T) -> (&String, &String),
) -> Option<&'a T> {
    let key_lower = key.to_lowercase();

    if let Some(item) = items.iter().find(|item| fields(item).0 == key) {
        return Some(item);
    }

    let mut named = items
        .iter()
        .filter(|item| fields(item).1.to_lowercase() == key_lower)
        .peekable();
    if named.peek().is_some() {
        return unique(named);
    }

    unique(
        items
            .iter()
            .filter(|item| fields(item).0.to_lowercase().starts_with(&key_lower)),
    )
}

fn unique<T>(mut matches: impl Iterator<Item = T>) -> Option<T> {
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
