//! HTTP client for the directory service

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::DirectoryError;
use crate::models::{CityName, StateName};
use crate::network::traits::DirectoryService;

/// reqwest-backed `DirectoryService`
#[derive(Clone, Debug)]
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(config: &Config) -> Result<Self, DirectoryError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|_| DirectoryError::InvalidBaseUrl(config.api_base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidBaseUrl(config.api_base_url.clone()));
        }
        Ok(DirectoryClient {
            client: create_client(config.request_timeout()),
            base_url,
        })
    }

    /// `{base}/states`
    pub fn states_url(&self) -> Result<Url, DirectoryError> {
        self.endpoint(&["states"])
    }

    /// `{base}/cities/{state}`, with the state encoded as one path segment
    pub fn cities_url(&self, state: &StateName) -> Result<Url, DirectoryError> {
        self.endpoint(&["cities", state.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, DirectoryError> {
        let start = Instant::now();
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        let items: Vec<T> = serde_json::from_str(&body)?;
        tracing::debug!(
            url = %url,
            count = items.len(),
            elapsed = ?start.elapsed(),
            "Directory list received"
        );
        Ok(items)
    }
}

#[async_trait]
impl DirectoryService for DirectoryClient {
    async fn fetch_states(&self) -> Result<Vec<StateName>, DirectoryError> {
        let url = self.states_url()?;
        self.get_list(url).await
    }

    async fn fetch_cities(&self, state: &StateName) -> Result<Vec<CityName>, DirectoryError> {
        let url = self.cities_url(state)?;
        self.get_list(url).await
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
