//! RemoteClient: network client for a running View server
//!
//! Sends every request over HTTP with the configured bearer token, extra headers
//! and timeout.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::debug;

use crate::client::{RawResponse, RequestBody, RestClient};
use crate::config::SdkConfig;
use crate::error::{ViewError, ViewResult};

/// Network client that talks to the View REST API.
pub struct RemoteClient {
    config: SdkConfig,
    http_client: Client,
}

impl RemoteClient {
    /// Create a RemoteClient from a configuration.
    ///
    /// # Example
    /// ```no_run
    /// # use view_sdk::{RemoteClient, SdkConfig};
    /// # use uuid::Uuid;
    /// let config = SdkConfig::new("http://localhost:8000", Uuid::new_v4(), "default");
    /// let client = RemoteClient::new(config).unwrap();
    /// ```
    pub fn new(config: SdkConfig) -> ViewResult<Self> {
        config.validate()?;
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ViewError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http_client })
    }
}

#[async_trait]
impl RestClient for RemoteClient {
    fn config(&self) -> &SdkConfig {
        &self.config
    }

    async fn send(&self, method: Method, url: &str, body: Option<RequestBody>) -> ViewResult<RawResponse> {
        debug!(%method, url, "sending request");

        let mut request = self.http_client.request(method.clone(), url);
        if !self.config.access_key.is_empty() {
            request = request.bearer_auth(&self.config.access_key);
        }
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, body.content_type).body(body.data);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(%method, url, status, bytes = body.len(), "received response");
        Ok(RawResponse { status, body })
    }
}
