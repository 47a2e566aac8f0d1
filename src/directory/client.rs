//! Directory HTTP client

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::error::{Result, RosterError};

use super::{parse_listing, DirectoryEntry};

/// Fetches the remote member listing
pub struct DirectoryClient {
    client: Client,
    url: String,
}

impl DirectoryClient {
    /// Build a client from the directory section of `config`
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.directory_timeout_ms))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| RosterError::Config(format!("directory client: {}", e)))?;

        Ok(Self {
            client,
            url: config.directory_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the listing once
    pub fn fetch(&self) -> Result<Vec<DirectoryEntry>> {
        tracing::debug!(url = %self.url, "Fetching member directory");

        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .inspect_err(|e| tracing::warn!(url = %self.url, error = %e, "Directory request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Directory returned an error status");
            return Err(RosterError::Network(format!(
                "directory endpoint returned status {}",
                status.as_u16()
            )));
        }

        let body = resp.bytes()?;
        let entries = parse_listing(&body)?;

        tracing::info!(count = entries.len(), "Fetched member directory");
        Ok(entries)
    }
}
