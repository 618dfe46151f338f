//! Webhook targets, rules and delivery events
//!
//! `MaxAttempts`, `RetryIntervalMs` and `TimeoutMs` configure the server's own
//! delivery retries; the SDK never retries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_min, require_non_empty, require_range, Validate};

/// Server event that fires a webhook rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "ObjectWrite")]
    ObjectWrite,
    #[serde(rename = "ObjectWriteAcl")]
    ObjectWriteAcl,
    #[serde(rename = "ObjectWriteTags")]
    ObjectWriteTags,
    #[serde(rename = "ObjectDelete")]
    ObjectDelete,
    #[serde(rename = "ObjectDeleteAcl")]
    ObjectDeleteAcl,
    #[serde(rename = "ObjectDeleteTags")]
    ObjectDeleteTags,
    #[serde(rename = "BucketWrite")]
    BucketWrite,
    #[serde(rename = "BucketDelete")]
    BucketDelete,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebhookTarget {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub url: String,
    pub content_type: String,
    pub expect_status: i32,
    pub created_utc: DateTime<Utc>,
}

impl WebhookTarget {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
            content_type: "application/json".to_string(),
            expect_status: 200,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for WebhookTarget {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("Url", &self.url)?;
        require_range("ExpectStatus", self.expect_status, 100, 599)
    }
}

impl Resource for WebhookTarget {
    const PATH: &'static str = "webhooktargets";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebhookRule {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "TargetGUID")]
    pub target_guid: Uuid,
    pub name: String,
    pub event_type: WebhookEventType,
    pub max_attempts: i32,
    pub retry_interval_ms: i32,
    pub timeout_ms: i32,
    pub created_utc: DateTime<Utc>,
}

impl WebhookRule {
    pub fn new(name: &str, target_guid: Uuid, event_type: WebhookEventType) -> Self {
        Self {
            guid: Uuid::new_v4(),
            target_guid,
            name: name.to_string(),
            event_type,
            max_attempts: 10,
            retry_interval_ms: 30_000,
            timeout_ms: 60_000,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for WebhookRule {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        if self.target_guid.is_nil() {
            return Err(ViewError::invalid("TargetGUID must be set"));
        }
        require_min("MaxAttempts", self.max_attempts, 1)?;
        require_min("RetryIntervalMs", self.retry_interval_ms, 1)?;
        require_min("TimeoutMs", self.timeout_ms, 1)
    }
}

impl Resource for WebhookRule {
    const PATH: &'static str = "webhookrules";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// One delivery of a webhook, tracked by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebhookEvent {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "TargetGUID")]
    pub target_guid: Uuid,
    #[serde(rename = "RuleGUID")]
    pub rule_guid: Uuid,
    pub event_type: WebhookEventType,
    pub content_type: String,
    pub expect_status: i32,
    pub url: String,
    pub attempt: i32,
    pub http_status: i32,
    pub created_utc: DateTime<Utc>,
    pub added_utc: Option<DateTime<Utc>>,
    pub last_attempt_utc: Option<DateTime<Utc>>,
    pub next_attempt_utc: Option<DateTime<Utc>>,
    pub last_failure_utc: Option<DateTime<Utc>>,
    pub success_utc: Option<DateTime<Utc>>,
    pub failed_utc: Option<DateTime<Utc>>,
}

impl WebhookEvent {
    pub fn is_delivered(&self) -> bool {
        self.success_utc.is_some()
    }

    pub fn is_failed(&self) -> bool {
        self.failed_utc.is_some()
    }
}

impl Validate for WebhookEvent {}

impl Resource for WebhookEvent {
    const PATH: &'static str = "webhookevents";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
