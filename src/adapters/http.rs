use crate::domain::model::{Entry, FeedDescriptor};
use crate::domain::ports::FeedSource;
use crate::utils::error::{FeedError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SERVICE_ENDPOINT: &str = "https://rsstojson.udacity.com/parseFeed";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ParseResponse {
    feed: ParsedFeed,
}

#[derive(Debug, Deserialize)]
struct ParsedFeed {
    #[serde(default)]
    entries: Vec<ParsedEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    content_snippet: String,
}

impl From<ParsedEntry> for Entry {
    fn from(entry: ParsedEntry) -> Self {
        Entry::new(entry.title, entry.link).with_snippet(entry.content_snippet)
    }
}

/// 透過 RSS 轉 JSON 服務取得條目：POST `{"url": ...}`，
/// 回應為 `{"feed": {"entries": [...]}}`。
#[derive(Debug, Clone)]
pub struct ParseServiceSource {
    endpoint: String,
    client: Client,
}

impl ParseServiceSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedSource for ParseServiceSource {
    async fn fetch_entries(&self, feed: &FeedDescriptor) -> Result<Vec<Entry>> {
        tracing::debug!("POST {} for feed {}", self.endpoint, feed.url);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "url": feed.url }))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Feed service response status: {}", status);
        if !status.is_success() {
            return Err(FeedError::FeedServiceError {
                status: status.as_u16(),
                url: feed.url.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: ParseResponse = serde_json::from_str(&body)?;
        Ok(parsed.feed.entries.into_iter().map(Entry::from).collect())
    }
}
