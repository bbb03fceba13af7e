//! User profile endpoints

use enloe_core::domain::user::User;
use enloe_core::dto::auth::ProfileUpdate;
use reqwest::Method;

use crate::EnloeClient;
use crate::error::Result;

impl EnloeClient {
    /// Get any user's public profile
    ///
    /// # Arguments
    /// * `user_id` - The user's identifier
    pub async fn get_profile(&self, user_id: &str) -> Result<User> {
        let path = format!("/api/auth/profiles/{}", user_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Update a profile row directly in the `users` table
    ///
    /// # Returns
    /// The updated profile
    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<User> {
        self.from("users")
            .update(update)
            .eq("id", user_id)
            .select("*")
            .single()
            .await
    }
}
