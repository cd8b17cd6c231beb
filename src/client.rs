//! Mailbox API async client implementation.

use crate::models::{
    BatchDeleteRequest, BatchDeleteResponse, DetailResponse, LatestResponse, ListResponse,
};
use crate::{Error, Message, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default API base URL when neither `--base` nor `API_BASE` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787/api";

/// Fixed client-side request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error bodies are truncated to this many bytes before being reported.
const ERROR_BODY_LIMIT: usize = 2048;

/// Query parameters for [`Client::list`].
///
/// `to` and `q` are forwarded only when non-empty; `q` is trimmed first.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub to: Option<String>,
    pub q: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            to: None,
            q: None,
            limit: 20,
            offset: 0,
        }
    }
}

/// Async client for the mailbox HTTP API.
///
/// Use [`Client::builder`] to set the base URL and bearer token. Every
/// operation performs exactly one HTTP call; there are no retries.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The normalized base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List messages, optionally filtered by recipient and full-text query.
    ///
    /// # Arguments
    /// * `query` - Recipient filter, search query, and paging window
    ///
    /// # Returns
    /// One page of messages plus the total count and the paging window the
    /// server actually applied
    ///
    /// # Examples
    /// ```no_run
    /// # use mailcli::{Client, ListQuery};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailcli::Error> {
    /// let client = Client::builder().token("secret").build()?;
    /// let page = client.list(&ListQuery { to: Some("a@test.dev".into()), ..Default::default() }).await?;
    /// println!("{} of {}", page.data.len(), page.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, query: &ListQuery) -> Result<ListResponse> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(to) = query.to.as_deref().filter(|s| !s.is_empty()) {
            params.push(("to", to.to_string()));
        }
        if let Some(q) = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            params.push(("q", q.to_string()));
        }
        params.push(("limit", query.limit.to_string()));
        params.push(("offset", query.offset.to_string()));

        self.request(Method::GET, "/messages", &params, None).await
    }

    /// Fetch the newest messages for a recipient.
    ///
    /// # Arguments
    /// * `to` - Recipient address (required by the server)
    /// * `n` - Number of messages, 1-20
    pub async fn latest(&self, to: &str, n: u32) -> Result<LatestResponse> {
        let params = [("to", to.to_string()), ("n", n.to_string())];
        self.request(Method::GET, "/messages/latest", &params, None)
            .await
    }

    /// Fetch one full message by id, including its body parts.
    pub async fn get(&self, id: &str) -> Result<Message> {
        let resp: DetailResponse = self
            .request(Method::GET, &format!("/messages/{id}"), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// Delete one message by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &format!("/messages/{id}"), &[], None)
            .await?;
        Ok(())
    }

    /// Delete several messages in one call.
    ///
    /// # Arguments
    /// * `ids` - Message ids; the server accepts at most 100 per call
    ///
    /// # Returns
    /// The number of messages the server actually deleted
    pub async fn batch_delete(&self, ids: Vec<String>) -> Result<u64> {
        let body = BatchDeleteRequest { ids };
        let resp: BatchDeleteResponse = self
            .request(
                Method::POST,
                "/messages/batch-delete",
                &[],
                Some(serde_json::to_value(&body)?),
            )
            .await?;
        Ok(resp.deleted)
    }

    /// Send a request and decode the JSON response body.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let res = self.execute(method, path, params, body).await?;
        let text = res.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request, mapping any non-success status to [`Error::Api`].
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut req = self
            .http
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }

        let res = req.send().await?;
        let status = res.status();
        debug!(%status, "received response");

        if status.is_client_error() || status.is_server_error() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                body: truncate_error_body(&body),
            });
        }
        Ok(res)
    }
}

/// Trim an error body and cap it at [`ERROR_BODY_LIMIT`] bytes.
fn truncate_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= ERROR_BODY_LIMIT {
        return trimmed.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

/// Builder for configuring a mailbox API client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `http://localhost:8787/api`
    /// - No bearer token
    /// - 10 second request timeout
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Set the API base URL (e.g. "http://localhost:8787/api").
    ///
    /// Surrounding whitespace and trailing slashes are stripped; an empty
    /// value falls back to the default.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token sent in the `Authorization` header.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailcli::Client;
    /// # fn main() -> Result<(), mailcli::Error> {
    /// let client = Client::builder()
    ///     .base_url("https://mail.example.com/api")
    ///     .token("secret")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut base = self.base_url.trim().trim_end_matches('/').to_string();
        if base.is_empty() {
            base = DEFAULT_BASE_URL.to_string();
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(Client {
            http,
            base_url: base,
            token: self.token.trim().to_string(),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
