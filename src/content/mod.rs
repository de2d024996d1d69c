//! Headless content integration.
//!
//! Fetches posts, pages, and media from a WordPress-style REST API. The
//! integration is configuration-driven: when disabled, every fetch is a
//! deliberate no-op returning `None` instead of touching the network, so the
//! presentation never depends on the CMS being reachable. Failures are
//! logged and swallowed for the same reason; nothing here is fatal.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ContentConfig;

/// Query parameters for listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub categories: Vec<u64>,
}

impl PostQuery {
    /// Renders the query into key/value pairs for the request URL.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if !self.categories.is_empty() {
            let joined = self
                .categories
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("categories".to_string(), joined));
        }
        params
    }
}

/// Client for the content API.
pub struct ContentClient {
    config: ContentConfig,
    http: reqwest::blocking::Client,
}

impl ContentClient {
    /// Builds a client over the given configuration.
    pub fn new(config: ContentConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    /// Whether the integration is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Fetches a list of posts.
    #[must_use]
    pub fn fetch_posts(&self, query: &PostQuery) -> Option<Value> {
        self.fetch("/posts", &query.to_params())
    }

    /// Fetches a page by slug.
    #[must_use]
    pub fn fetch_page(&self, slug: &str) -> Option<Value> {
        self.fetch("/pages", &[("slug".to_string(), slug.to_string())])
    }

    /// Fetches a media item by id.
    #[must_use]
    pub fn fetch_media(&self, media_id: u64) -> Option<Value> {
        self.fetch(&format!("/media/{media_id}"), &[])
    }

    /// Performs one GET against the content API.
    ///
    /// Disabled integration and request failures both resolve to `None`;
    /// the caller renders without the content either way.
    fn fetch(&self, endpoint: &str, params: &[(String, String)]) -> Option<Value> {
        if !self.config.enabled {
            warn!(endpoint, "content integration is disabled");
            return None;
        }

        match self.request(endpoint, params) {
            Ok(value) => {
                debug!(endpoint, "content fetched");
                Some(value)
            }
            Err(err) => {
                error!(endpoint, %err, "content fetch failed");
                None
            }
        }
    }

    fn request(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{endpoint}", self.config.api_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .context(format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Content API error: {status}");
        }

        response
            .json()
            .context(format!("Invalid JSON from {url}"))
    }
}
