//! SDK configuration
//!
//! Every request built by the SDK reads its endpoint, tenant scope, bearer token
//! and timeout from an [`SdkConfig`]. The same values can be supplied through the
//! `VIEW_*` environment variables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{ViewError, ViewResult};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/";
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Connection settings shared by every resource call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Base URL of the View server, always ending in `/`
    pub endpoint: String,
    /// Tenant that scopes every tenant-level resource
    pub tenant_guid: Uuid,
    /// Bearer token sent on each request
    pub access_key: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Extra headers added to each request
    pub headers: BTreeMap<String, String>,
    /// Surface non-success responses as [`ViewError::Api`] instead of None/false
    pub strict: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tenant_guid: Uuid::nil(),
            access_key: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers: BTreeMap::new(),
            strict: false,
        }
    }
}

impl SdkConfig {
    /// Create a configuration for the given server, tenant and access key.
    pub fn new(endpoint: &str, tenant_guid: Uuid, access_key: &str) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint),
            tenant_guid,
            access_key: access_key.to_string(),
            ..Self::default()
        }
    }

    /// Build a configuration from `VIEW_ENDPOINT`, `VIEW_TENANT_GUID`,
    /// `VIEW_ACCESS_KEY`, `VIEW_TIMEOUT_MS` and `VIEW_STRICT`.
    pub fn from_env() -> ViewResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> ViewResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("VIEW_ENDPOINT") {
            config.endpoint = normalize_endpoint(&endpoint);
        }
        if let Some(tenant) = lookup("VIEW_TENANT_GUID") {
            config.tenant_guid = Uuid::parse_str(tenant.trim())
                .map_err(|e| ViewError::Config(format!("VIEW_TENANT_GUID: {}", e)))?;
        }
        if let Some(key) = lookup("VIEW_ACCESS_KEY") {
            config.access_key = key;
        }
        if let Some(timeout) = lookup("VIEW_TIMEOUT_MS") {
            config.timeout_ms = timeout
                .trim()
                .parse()
                .map_err(|e| ViewError::Config(format!("VIEW_TIMEOUT_MS: {}", e)))?;
        }
        if let Some(strict) = lookup("VIEW_STRICT") {
            config.strict = matches!(strict.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the endpoint scheme and timeout.
    pub fn validate(&self) -> ViewResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ViewError::Config(format!(
                "endpoint must start with http:// or https://: {}",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ViewError::Config("timeout_ms must be greater than zero".to_string()));
        }
        Ok(())
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    format!("{}/", endpoint.trim().trim_end_matches('/'))
}
