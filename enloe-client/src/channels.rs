//! Channel-related API endpoints

use enloe_core::domain::channel::Channel;
use enloe_core::dto::channel::NewChannel;
use enloe_core::validation::validate_name;

use crate::EnloeClient;
use crate::error::Result;

impl EnloeClient {
    /// List a server's channels, oldest first
    pub async fn get_server_channels(&self, server_id: &str) -> Result<Vec<Channel>> {
        self.from("channels")
            .select("*")
            .eq("server_id", server_id)
            .order("created_at", true)
            .execute()
            .await
    }

    /// Create a channel in a server
    ///
    /// # Returns
    /// The created channel
    pub async fn create_channel(&self, req: NewChannel) -> Result<Channel> {
        validate_name("Channel name", &req.name)?;

        self.from("channels")
            .insert(&[req])
            .select("*")
            .single()
            .await
    }
}
