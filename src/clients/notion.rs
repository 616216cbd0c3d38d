use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::clients::SprintFilter;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Thin client over one Notion database.
///
/// Every call sends a single request with the headers derived from the
/// config and hands back the decoded JSON body as-is. Status codes are not
/// inspected: an error object from Notion is returned like any other body
/// (see [`crate::RemoteApiError::from_body`]). No timeout or retry is applied.
#[derive(Debug)]
pub struct NotionDatabaseClient {
    client: Client,
    config: ClientConfig,
}

impl NotionDatabaseClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().default_headers(config.headers()?).build()?;
        Ok(Self { client, config })
    }

    /// Queries every row of the configured database. Sends no body.
    #[instrument(skip(self), fields(database_id = %self.config.database_id))]
    pub async fn fetch_all(&self) -> Result<Value> {
        let path = self.query_path();
        self.send(self.request(Method::POST, &path), &path).await
    }

    /// Patches a page with `data`, forwarded unchanged as the request body.
    ///
    /// The id is placed in the path as-is, so an empty id or one containing
    /// `/`, `?` or `#` is rejected with [`Error::InvalidPageId`] before any
    /// request is sent.
    #[instrument(skip(self, data))]
    pub async fn update_page(&self, page_id: &str, data: &Value) -> Result<Value> {
        if page_id.is_empty() || page_id.contains(['/', '?', '#']) {
            return Err(Error::InvalidPageId(page_id.to_string()));
        }

        let path = format!("pages/{page_id}");
        self.send(self.request(Method::PATCH, &path).json(data), &path).await
    }

    /// Queries rows whose `Sprint` multi-select contains `Sprint {sprint_number}`.
    #[instrument(skip(self), fields(database_id = %self.config.database_id))]
    pub async fn fetch_sprint(&self, sprint_number: u32) -> Result<Value> {
        let body = SprintFilter::sprint(sprint_number).to_query_body();
        let path = self.query_path();
        self.send(self.request(Method::POST, &path).json(&body), &path).await
    }

    fn query_path(&self) -> String {
        format!("databases/{}/query", self.config.database_id)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.config.url(path))
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        debug!(path, %status, "notion response");

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            debug!(path, %status, len = body.len(), "response body is not JSON");
            Error::BadResponseBody { status, source }
        })
    }
}
