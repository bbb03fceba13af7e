//! Server-related API endpoints

use enloe_core::domain::server::{Server, ServerMember};
use enloe_core::dto::server::{MembershipWithServer, NewMembership, NewServer};
use enloe_core::validation::validate_name;
use tracing::debug;

use crate::EnloeClient;
use crate::error::Result;
use crate::query::TableQuery;

impl EnloeClient {
    // =============================================================================
    // Server Management
    // =============================================================================

    /// Create a server owned by `req.owner_id`
    ///
    /// The owner is enrolled as an admin member right after the insert so the
    /// server shows up in their server list. If enrolment fails the server row
    /// stays and the error is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use enloe_client::EnloeClient;
    /// # use enloe_core::dto::server::NewServer;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = EnloeClient::new("http://localhost:7130");
    /// let server = client.create_server(NewServer {
    ///     name: "rustaceans".to_string(),
    ///     description: None,
    ///     owner_id: "user-id".to_string(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_server(&self, req: NewServer) -> Result<Server> {
        validate_name("Server name", &req.name)?;

        let server: Server = self
            .from("servers")
            .insert(&[&req])
            .select("*")
            .single()
            .await?;
        debug!("Created server {} ({})", server.name, server.id);

        self.membership_query(&NewMembership::owner(&server.id, &req.owner_id))
            .single::<ServerMember>()
            .await?;
        Ok(server)
    }

    /// List the servers a user is a member of
    ///
    /// Order is whatever the backend returns.
    pub async fn get_user_servers(&self, user_id: &str) -> Result<Vec<Server>> {
        let rows: Vec<MembershipWithServer> = self.user_servers_query(user_id).execute().await?;

        Ok(rows.into_iter().map(|row| row.servers).collect())
    }

    // =============================================================================
    // Membership
    // =============================================================================

    /// Join a server as a regular member
    pub async fn join_server(&self, server_id: &str, user_id: &str) -> Result<ServerMember> {
        self.membership_query(&NewMembership::member(server_id, user_id))
            .single()
            .await
    }

    /// Leave a server
    pub async fn leave_server(&self, server_id: &str, user_id: &str) -> Result<()> {
        self.from("server_members")
            .delete()
            .eq("server_id", server_id)
            .eq("user_id", user_id)
            .execute_empty()
            .await
    }

    fn user_servers_query(&self, user_id: &str) -> TableQuery<'_> {
        self.from("server_members")
            .select("servers!inner(*)")
            .eq("user_id", user_id)
    }

    fn membership_query(&self, membership: &NewMembership) -> TableQuery<'_> {
        self.from("server_members")
            .insert(&[membership])
            .select("*")
    }
}
