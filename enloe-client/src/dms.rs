//! Direct message endpoints

use enloe_core::domain::dm::{DmChannel, DmMessage};
use enloe_core::dto::dm::{NewDmChannel, NewDmMessage};

use crate::EnloeClient;
use crate::error::Result;
use crate::query::TableQuery;

impl EnloeClient {
    // =============================================================================
    // DM Threads
    // =============================================================================

    /// List the DM threads a user takes part in, newest first
    pub async fn get_user_dm_channels(&self, user_id: &str) -> Result<Vec<DmChannel>> {
        self.dm_channels_query(user_id).execute().await
    }

    fn dm_channels_query(&self, user_id: &str) -> TableQuery<'_> {
        let participant = format!(
            "participant1_id.eq.{id},participant2_id.eq.{id}",
            id = user_id
        );

        self.from("dm_channels")
            .select("*")
            .or(&participant)
            .order("created_at", false)
    }

    /// Open a DM thread between two users
    pub async fn create_dm_channel(
        &self,
        participant1_id: &str,
        participant2_id: &str,
    ) -> Result<DmChannel> {
        let channel = NewDmChannel {
            participant1_id: participant1_id.to_string(),
            participant2_id: participant2_id.to_string(),
        };

        self.from("dm_channels")
            .insert(&[channel])
            .select("*")
            .single()
            .await
    }

    // =============================================================================
    // DM Messages
    // =============================================================================

    /// Fetch the most recent messages of a DM thread, newest first
    pub async fn get_dm_channel_messages(
        &self,
        dm_channel_id: &str,
        limit: usize,
    ) -> Result<Vec<DmMessage>> {
        self.recent_messages_query("dm_messages", "dm_channel_id", dm_channel_id, limit)
            .execute()
            .await
    }

    /// Post a message to a DM thread
    pub async fn send_dm_message(&self, message: NewDmMessage) -> Result<DmMessage> {
        message.validate()?;

        self.from("dm_messages")
            .insert(&[message])
            .select("*")
            .single()
            .await
    }
}
