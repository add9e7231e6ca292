//! HTTP client for the Ship-it release-tracking API
//!
//! Ship-it owns the release records; this client only proposes updates and
//! reads them back. Every call is a single request/response with no retry.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::ShipItInstanceConfig;

/// Full release record as returned by the API, field name to value.
/// Insertion order is preserved so logs match what the service sent.
pub type ReleaseInfo = IndexMap<String, Value>;

pub struct ShipItClient {
    pub api_root: String,
    pub client: Client,
}

impl ShipItClient {
    pub fn new(cfg: &ShipItInstanceConfig) -> Result<Self> {
        let ((username, password), api_root, timeout) = cfg.auth_primitives();

        let mut headers = HeaderMap::new();
        let token = base64::encode_config(format!("{username}:{password}"), base64::STANDARD);
        let mut hv = HeaderValue::from_str(&format!("Basic {token}"))?;
        hv.set_sensitive(true);
        headers.insert(AUTHORIZATION, hv);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(ShipItClient { api_root, client })
    }

    /// Update fields on an existing release
    pub async fn update(&self, release_name: &str, fields: &IndexMap<String, Value>) -> Result<()> {
        let url = format!("{}/releases/{}", self.api_root, release_name);
        debug!("POST {url}");
        self.client
            .post(&url)
            .json(fields)
            .send()
            .await
            .with_context(|| format!("updating release at {url}"))?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch the full release record
    pub async fn get_release(&self, release_name: &str) -> Result<ReleaseInfo> {
        let url = format!("{}/releases/{}", self.api_root, release_name);
        debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("fetching release from {url}"))?
            .error_for_status()?;
        let info: ReleaseInfo = resp.json().await?;
        Ok(info)
    }

    /// Submit a brand-new release
    pub async fn submit(&self, data: &IndexMap<String, Value>) -> Result<()> {
        // the service scopes its CSRF token by product
        let csrf_prefix = data
            .get("product")
            .and_then(Value::as_str)
            .map(|p| format!("{p}-"))
            .unwrap_or_default();

        let url = format!("{}/submit_release.html", self.api_root);
        debug!("POST {url}");
        self.client
            .post(&url)
            .header("X-CSRF-Token-Prefix", &csrf_prefix)
            .json(data)
            .send()
            .await
            .with_context(|| format!("submitting release to {url}"))?
            .error_for_status()?;
        Ok(())
    }
}
