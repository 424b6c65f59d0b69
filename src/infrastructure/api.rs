//! Remote feed API
//!
//! Two read-only endpoints: the ranked ID list and a single item by id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    domain::item::{Item, ItemId},
    infrastructure::{config::ApiConfig, error::FetchError},
};

/// Source of ranked IDs and item bodies
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// `GET /topstories`
    async fn top_stories(&self) -> Result<Vec<ItemId>, FetchError>;
    /// `GET /item/{id}`
    async fn item(&self, id: ItemId) -> Result<Item, FetchError>;
}

/// reqwest-backed client for the Hacker News Firebase API
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
    path_suffix: String,
}

impl HackerNewsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            path_suffix: config.path_suffix.clone(),
        })
    }

    pub fn top_stories_url(&self) -> String {
        format!("{}/topstories{}", self.base_url, self.path_suffix)
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/item/{id}{}", self.base_url, self.path_suffix)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FeedSource for HackerNewsClient {
    async fn top_stories(&self) -> Result<Vec<ItemId>, FetchError> {
        self.get_json(&self.top_stories_url()).await
    }

    async fn item(&self, id: ItemId) -> Result<Item, FetchError> {
        // Deleted or unknown ids come back as a literal `null`
        let item: Option<Item> = self.get_json(&self.item_url(id)).await?;
        item.ok_or(FetchError::Missing(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_endpoint_urls() -> Result<(), FetchError> {
        let client = HackerNewsClient::new(&config("https://hacker-news.firebaseio.com/v0/"))?;

        assert_eq!(
            client.top_stories_url(),
            "https://hacker-news.firebaseio.com/v0/topstories.json"
        );
        assert_eq!(
            client.item_url(ItemId(8863)),
            "https://hacker-news.firebaseio.com/v0/item/8863.json"
        );
        Ok(())
    }

    #[test]
    fn test_endpoint_urls_without_suffix() -> Result<(), FetchError> {
        let client = HackerNewsClient::new(&ApiConfig {
            path_suffix: String::new(),
            ..config("http://localhost:8080")
        })?;

        assert_eq!(client.top_stories_url(), "http://localhost:8080/topstories");
        assert_eq!(client.item_url(ItemId(1)), "http://localhost:8080/item/1");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connectivity_failure() -> Result<(), FetchError> {
        // Port 9 (discard) on loopback is closed in any sane test environment
        let client = HackerNewsClient::new(&config("http://127.0.0.1:9"))?;

        let error = client
            .top_stories()
            .await
            .expect_err("nothing listens on the discard port");
        assert!(error.is_connectivity_failure(), "unexpected error: {error}");
        Ok(())
    }
}
