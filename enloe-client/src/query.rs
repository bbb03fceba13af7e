//! Relational query interface
//!
//! A small builder over the backend's record endpoint
//! (`/api/database/records/{table}`). Filters, ordering and limits are
//! encoded as query parameters in the order they were added:
//!
//! | Builder call            | Query pair                       |
//! |-------------------------|----------------------------------|
//! | `.select("*")`          | `select=*`                       |
//! | `.eq("id", "42")`       | `id=eq.42`                       |
//! | `.or("a.eq.1,b.eq.1")`  | `or=(a.eq.1,b.eq.1)`             |
//! | `.order("created_at", false)` | `order=created_at.desc`    |
//! | `.limit(50)`            | `limit=50`                       |

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::EnloeClient;
use crate::error::{ClientError, Result};

/// Kind of statement a query runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

impl Operation {
    fn method(self) -> Method {
        match self {
            Operation::Select => Method::GET,
            Operation::Insert => Method::POST,
            Operation::Update => Method::PATCH,
            Operation::Delete => Method::DELETE,
        }
    }

    /// Writes ask the backend to echo the affected rows
    fn returns_rows(self) -> bool {
        matches!(self, Operation::Insert | Operation::Update)
    }
}

/// A pending query against one table
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a EnloeClient,
    table: String,
    operation: Operation,
    params: Vec<(String, String)>,
    body: Option<JsonValue>,
    invalid: Option<String>,
}

impl EnloeClient {
    /// Start a query against `table`
    ///
    /// # Example
    /// ```no_run
    /// # use enloe_client::EnloeClient;
    /// # use enloe_core::domain::channel::Channel;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = EnloeClient::new("http://localhost:7130");
    /// let channels: Vec<Channel> = client
    ///     .from("channels")
    ///     .select("*")
    ///     .eq("server_id", "7d3c")
    ///     .order("created_at", true)
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            operation: Operation::Select,
            params: Vec::new(),
            body: None,
            invalid: None,
        }
    }
}

impl<'a> TableQuery<'a> {
    /// Columns to return; also applies to the rows echoed by writes
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Insert rows
    pub fn insert<T: Serialize>(mut self, rows: &[T]) -> Self {
        self.operation = Operation::Insert;
        self.set_body(rows);
        self
    }

    /// Update every row matching the filters with `patch`
    pub fn update<T: Serialize>(mut self, patch: &T) -> Self {
        self.operation = Operation::Update;
        self.set_body(patch);
        self
    }

    /// Delete every row matching the filters
    pub fn delete(mut self) -> Self {
        self.operation = Operation::Delete;
        self.body = None;
        self
    }

    /// Equality filter on a column
    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Disjunction of filter expressions, e.g. `a.eq.1,b.eq.1`
    pub fn or(mut self, filters: &str) -> Self {
        self.params.push(("or".to_string(), format!("({})", filters)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Query pairs in the order they will be sent
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }

    fn set_body<T: Serialize + ?Sized>(&mut self, value: &T) {
        match serde_json::to_value(value) {
            Ok(body) => self.body = Some(body),
            Err(e) => self.invalid = Some(format!("Failed to encode request body: {}", e)),
        }
    }

    async fn send(self) -> Result<reqwest::Response> {
        if let Some(message) = self.invalid {
            return Err(ClientError::ParseError(message));
        }

        let path = format!("/api/database/records/{}", self.table);
        let mut request = self
            .client
            .request(self.operation.method(), &path)
            .query(&self.params);

        if self.operation.returns_rows() {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(body) = &self.body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Run the query and decode every returned row
    pub async fn execute<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let client = self.client;
        let response = self.send().await?;
        let rows: Option<Vec<T>> = client.handle_response(response).await?;
        Ok(rows.unwrap_or_default())
    }

    /// Run the query and return exactly one row
    pub async fn single<T: DeserializeOwned>(self) -> Result<T> {
        let table = self.table.clone();
        self.execute::<T>()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("no row returned from '{}'", table)))
    }

    /// Run the query, ignoring any response body
    pub async fn execute_empty(self) -> Result<()> {
        let client = self.client;
        let response = self.send().await?;
        client.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs<'q>(query: &'q TableQuery<'_>) -> Vec<(&'q str, &'q str)> {
        query
            .query_pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_select_with_filters_and_order() {
        let client = EnloeClient::new("http://localhost:7130");
        let query = client
            .from("messages")
            .select("*, users!inner(nickname, avatar_url)")
            .eq("channel_id", "c1")
            .order("created_at", false)
            .limit(50);

        assert_eq!(query.operation(), Operation::Select);
        assert_eq!(
            pairs(&query),
            vec![
                ("select", "*, users!inner(nickname, avatar_url)"),
                ("channel_id", "eq.c1"),
                ("order", "created_at.desc"),
                ("limit", "50"),
            ]
        );
        assert!(query.body().is_none());
    }

    #[test]
    fn test_or_filter_is_parenthesized() {
        let client = EnloeClient::new("http://localhost:7130");
        let query = client
            .from("dm_channels")
            .select("*")
            .or("participant1_id.eq.u1,participant2_id.eq.u1");

        assert_eq!(
            pairs(&query)[1],
            ("or", "(participant1_id.eq.u1,participant2_id.eq.u1)")
        );
    }

    #[test]
    fn test_insert_body_is_array() {
        let client = EnloeClient::new("http://localhost:7130");
        let query = client
            .from("channels")
            .insert(&[json!({ "server_id": "s1", "name": "general", "type": "text" })])
            .select("*");

        assert_eq!(query.operation(), Operation::Insert);
        assert!(query.operation().returns_rows());
        assert_eq!(query.body().unwrap()[0]["name"], "general");
    }

    #[test]
    fn test_delete_keeps_filters() {
        let client = EnloeClient::new("http://localhost:7130");
        let query = client
            .from("server_members")
            .delete()
            .eq("server_id", "s1")
            .eq("user_id", "u1");

        assert_eq!(query.operation(), Operation::Delete);
        assert_eq!(query.operation().method(), Method::DELETE);
        assert_eq!(
            pairs(&query),
            vec![("server_id", "eq.s1"), ("user_id", "eq.u1")]
        );
    }

    #[test]
    fn test_update_is_patch() {
        let client = EnloeClient::new("http://localhost:7130");
        let query = client
            .from("users")
            .update(&json!({ "bio": "hi" }))
            .eq("id", "u1");

        assert_eq!(query.operation().method(), Method::PATCH);
        assert_eq!(query.body(), Some(&json!({ "bio": "hi" })));
    }
}
