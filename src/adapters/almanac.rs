//! Client for the day-indexed almanac feed.
//!
//! Endpoint: GET {base}/{MM}/{DD}
//! The feed returns three arrays (events, births, deaths); any of them may
//! be absent.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{AlmanacSource, SourceError};

/// Almanac feed client
pub struct AlmanacClient {
    base_url: String,
    user_agent: String,
    client: reqwest::Client,
}

/// One day of feed entries.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AlmanacDay {
    #[serde(default)]
    pub events: Vec<AlmanacEntry>,

    #[serde(default)]
    pub births: Vec<AlmanacEntry>,

    #[serde(default)]
    pub deaths: Vec<AlmanacEntry>,
}

/// A single feed entry. Every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct AlmanacEntry {
    pub year: Option<i32>,

    pub text: Option<String>,

    #[serde(default)]
    pub pages: Vec<AlmanacPage>,
}

/// Encyclopedia page attached to a feed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AlmanacPage {
    pub title: Option<String>,

    pub extract: Option<String>,

    #[serde(default)]
    pub content_urls: Option<ContentUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUrls {
    pub desktop: Option<DesktopUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesktopUrls {
    pub page: Option<String>,
}

impl AlmanacEntry {
    /// Desktop page URL of the first attached page, if any.
    pub fn page_url(&self) -> Option<&str> {
        self.pages
            .first()
            .and_then(|p| p.content_urls.as_ref())
            .and_then(|u| u.desktop.as_ref())
            .and_then(|d| d.page.as_deref())
    }

    /// Extract of the first attached page, if any.
    pub fn page_extract(&self) -> Option<&str> {
        self.pages.first().and_then(|p| p.extract.as_deref())
    }

    /// Title of the first attached page, if any.
    pub fn page_title(&self) -> Option<&str> {
        self.pages.first().and_then(|p| p.title.as_deref())
    }
}

impl AlmanacClient {
    /// Create a new client
    pub fn new(base_url: String, user_agent: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url,
            user_agent,
            client,
        })
    }
}

#[async_trait]
impl AlmanacSource for AlmanacClient {
    async fn day_entries(&self, month: u32, day: u32) -> Result<AlmanacDay, SourceError> {
        let url = format!("{}/{:02}/{:02}", self.base_url, month, day);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!(
                "almanac feed returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parses_with_missing_arrays() {
        let day: AlmanacDay = serde_json::from_str(r#"{"events": []}"#).unwrap();
        assert!(day.events.is_empty());
        assert!(day.births.is_empty());
        assert!(day.deaths.is_empty());
    }

    #[test]
    fn test_entry_page_accessors() {
        let json = r#"{
            "year": 1947,
            "text": "India gains independence",
            "pages": [{
                "title": "Independence Day (India)",
                "extract": "Independence Day is celebrated annually on 15 August.",
                "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Independence_Day_(India)"}}
            }]
        }"#;

        let entry: AlmanacEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.year, Some(1947));
        assert_eq!(entry.page_title(), Some("Independence Day (India)"));
        assert_eq!(
            entry.page_url(),
            Some("https://en.wikipedia.org/wiki/Independence_Day_(India)")
        );
        assert!(entry.page_extract().unwrap().starts_with("Independence Day"));
    }

    #[test]
    fn test_entry_with_no_pages() {
        let entry: AlmanacEntry = serde_json::from_str(r#"{"year": 1900}"#).unwrap();
        assert!(entry.page_url().is_none());
        assert!(entry.page_extract().is_none());
        assert!(entry.text.is_none());
    }
}
