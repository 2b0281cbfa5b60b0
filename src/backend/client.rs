//! Journal Backend REST Client
//!
//! HTTP client for the journal backend's REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::dto::{self, JournalEntry, JournalRecord, SearchHit, WeeklyProfile};
use super::error::{BackendError, BackendResult};
use super::SentimentBackend;
use crate::config::BackendConfig;

/// Journal backend REST API client
pub struct JournalClient {
    client: Client,
    config: BackendConfig,
}

impl JournalClient {
    /// Create a new client with the given configuration.
    ///
    /// Without `request_timeout_ms` requests wait for the backend indefinitely.
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.url.trim_end_matches('/'), path)
    }

    /// Submit a journal entry for analysis.
    ///
    /// One request, no retry.
    pub async fn post_entry(&self, entry: &JournalEntry) -> BackendResult<JournalRecord> {
        let url = self.url("/journal/text");
        tracing::debug!(
            url = %url,
            chars = entry.text.chars().count(),
            "Submitting journal entry"
        );

        let response = self
            .client
            .post(&url)
            .json(entry)
            .send()
            .await
            .map_err(BackendError::from_send)?;

        read_json(response).await
    }

    /// Fetch the most recent stored entries
    pub async fn recent_entries(&self, limit: usize) -> BackendResult<Vec<JournalRecord>> {
        let url = self.url("/memory/recent");
        tracing::debug!(url = %url, limit, "Fetching recent entries");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(BackendError::from_send)?;

        read_json(response).await
    }

    /// Find stored entries semantically close to `query`
    pub async fn semantic_search(
        &self,
        query: &JournalEntry,
        top_k: usize,
    ) -> BackendResult<Vec<SearchHit>> {
        let url = self.url("/memory/semantic-search");
        tracing::debug!(url = %url, top_k, "Searching entries");

        let response = self
            .client
            .post(&url)
            .query(&[("top_k", top_k)])
            .json(query)
            .send()
            .await
            .map_err(BackendError::from_send)?;

        read_json(response).await
    }

    /// Fetch the emotional profile over the last `days` days
    pub async fn weekly_profile(&self, days: u32) -> BackendResult<WeeklyProfile> {
        let url = self.url("/cognition/weekly");
        tracing::debug!(url = %url, days, "Fetching weekly profile");

        let response = self
            .client
            .get(&url)
            .query(&[("days", days)])
            .send()
            .await
            .map_err(BackendError::from_send)?;

        read_json(response).await
    }
}

#[async_trait]
impl SentimentBackend for JournalClient {
    async fn submit_entry(&self, entry: &JournalEntry) -> BackendResult<JournalRecord> {
        self.post_entry(entry).await
    }
}

/// Read the body, then check status and decode
async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(BackendError::from_send)?;

    tracing::debug!(
        status = status.as_u16(),
        bytes = body.len(),
        "Backend responded"
    );

    if !status.is_success() {
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    dto::decode(&body)
}
