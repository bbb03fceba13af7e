//! Message-related API endpoints

use enloe_core::domain::message::Message;
use enloe_core::dto::message::NewMessage;

use crate::EnloeClient;
use crate::error::Result;
use crate::query::TableQuery;

/// Columns selected for message lists: the row plus its author's profile
const MESSAGE_COLUMNS: &str = "*, users!inner(nickname, avatar_url)";

impl EnloeClient {
    /// Fetch the most recent messages of a channel
    ///
    /// # Arguments
    /// * `channel_id` - The channel to read
    /// * `limit` - Maximum number of messages
    ///
    /// # Returns
    /// Messages newest first
    pub async fn get_channel_messages(&self, channel_id: &str, limit: usize) -> Result<Vec<Message>> {
        self.recent_messages_query("messages", "channel_id", channel_id, limit)
            .execute()
            .await
    }

    /// Post a message to a channel
    pub async fn send_message(&self, message: NewMessage) -> Result<Message> {
        message.validate()?;

        self.from("messages")
            .insert(&[message])
            .select("*")
            .single()
            .await
    }

    /// Delete a message
    pub async fn delete_message(&self, message_id: &str) -> Result<()> {
        self.from("messages")
            .delete()
            .eq("id", message_id)
            .execute_empty()
            .await
    }

    /// Newest `limit` rows of a message table for one thread, author embedded
    pub(crate) fn recent_messages_query(
        &self,
        table: &str,
        thread_column: &str,
        thread_id: &str,
        limit: usize,
    ) -> TableQuery<'_> {
        self.from(table)
            .select(MESSAGE_COLUMNS)
            .eq(thread_column, thread_id)
            .order("created_at", false)
            .limit(limit)
    }
}
