//! Client for encyclopedia page summaries, fetched through a CORS relay.
//!
//! The relay wraps the upstream body in a JSON envelope, so a successful
//! lookup parses twice: the envelope, then the summary inside `contents`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{SourceError, SummarySource};

/// Summary endpoint client
pub struct EncyclopediaClient {
    relay_url: String,
    summary_base: String,
    client: reqwest::Client,
}

/// Relay envelope; the upstream body arrives as a string.
#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    contents: String,
}

/// The part of the summary body we use.
#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

impl EncyclopediaClient {
    /// Create a new client
    pub fn new(relay_url: String, summary_base: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            relay_url,
            summary_base,
            client,
        })
    }

    /// Direct (pre-relay) summary URL for a title. Whitespace runs become
    /// underscores.
    fn summary_url(&self, title: &str) -> String {
        let underscored = title.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}/{}", self.summary_base, underscored)
    }
}

#[async_trait]
impl SummarySource for EncyclopediaClient {
    async fn summary(&self, title: &str) -> Result<Option<String>, SourceError> {
        let direct = self.summary_url(title);

        let response = self
            .client
            .get(&self.relay_url)
            .query(&[("url", direct.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!(
                "relay returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let envelope: RelayEnvelope =
            serde_json::from_str(&body).map_err(|e| SourceError::Malformed(e.to_string()))?;

        let summary: PageSummary = serde_json::from_str(&envelope.contents)
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(summary.extract.filter(|s| !s.is_empty()))
    }
}
