//! Crawl schedules, filters, plans and operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_min, require_non_empty, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScheduleInterval {
    #[serde(rename = "OneTime")]
    OneTime,
    #[serde(rename = "SecondsInterval")]
    SecondsInterval,
    #[serde(rename = "MinutesInterval")]
    MinutesInterval,
    #[default]
    #[serde(rename = "HoursInterval")]
    HoursInterval,
    #[serde(rename = "DaysInterval")]
    DaysInterval,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrawlSchedule {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub schedule: ScheduleInterval,
    pub interval: i32,
    pub created_utc: DateTime<Utc>,
}

impl CrawlSchedule {
    pub fn new(name: &str, schedule: ScheduleInterval, interval: i32) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            schedule,
            interval,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for CrawlSchedule {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_min("Interval", self.interval, 1)
    }
}

impl Resource for CrawlSchedule {
    const PATH: &'static str = "crawlschedules";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Which discovered files a crawl keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrawlFilter {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub minimum_size: i64,
    pub maximum_size: Option<i64>,
    pub include_subdirectories: bool,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub allowed_content_types: Vec<String>,
    pub created_utc: DateTime<Utc>,
}

impl CrawlFilter {
    pub fn new(name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            minimum_size: 1,
            include_subdirectories: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }

    /// Whether a discovered file of this key, size and content type passes.
    pub fn accepts(&self, key: &str, size: i64, content_type: Option<&str>) -> bool {
        if size < self.minimum_size || self.maximum_size.map_or(false, |max| size > max) {
            return false;
        }
        if !self.include_subdirectories && key.trim_start_matches('/').contains('/') {
            return false;
        }
        if self.prefix.as_deref().map_or(false, |p| !key.starts_with(p)) {
            return false;
        }
        if self.suffix.as_deref().map_or(false, |s| !key.ends_with(s)) {
            return false;
        }
        if self.allowed_content_types.is_empty() {
            return true;
        }
        content_type.map_or(false, |ct| self.allowed_content_types.iter().any(|a| a.eq_ignore_ascii_case(ct)))
    }
}

impl Validate for CrawlFilter {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_min("MinimumSize", self.minimum_size, 0)?;
        if let Some(max) = self.maximum_size {
            require_min("MaximumSize", max, 0)?;
            if max < self.minimum_size {
                return Err(ViewError::invalid(format!(
                    "MaximumSize ({}) must not be less than MinimumSize ({})",
                    max, self.minimum_size
                )));
            }
        }
        Ok(())
    }
}

impl Resource for CrawlFilter {
    const PATH: &'static str = "crawlfilters";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Ties a data repository to a schedule, filter and processing rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrawlPlan {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "DataRepositoryGUID")]
    pub data_repository_guid: Uuid,
    #[serde(rename = "CrawlScheduleGUID")]
    pub crawl_schedule_guid: Uuid,
    #[serde(rename = "CrawlFilterGUID")]
    pub crawl_filter_guid: Uuid,
    #[serde(rename = "MetadataRuleGUID")]
    pub metadata_rule_guid: Option<Uuid>,
    #[serde(rename = "EmbeddingsRuleGUID")]
    pub embeddings_rule_guid: Option<Uuid>,
    pub name: String,
    pub enumeration_directory: Option<String>,
    pub enumerations_to_retain: i32,
    pub max_drain_tasks: i32,
    pub process_additions: bool,
    pub process_deletions: bool,
    pub process_updates: bool,
    pub processing_endpoint: Option<String>,
    pub processing_access_key: Option<String>,
    pub cleanup_endpoint: Option<String>,
    pub cleanup_access_key: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl CrawlPlan {
    pub fn new(name: &str, data_repository_guid: Uuid, crawl_schedule_guid: Uuid, crawl_filter_guid: Uuid) -> Self {
        Self {
            guid: Uuid::new_v4(),
            data_repository_guid,
            crawl_schedule_guid,
            crawl_filter_guid,
            name: name.to_string(),
            enumeration_directory: Some("./enumerations/".to_string()),
            enumerations_to_retain: 30,
            max_drain_tasks: 4,
            process_additions: true,
            process_deletions: true,
            process_updates: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for CrawlPlan {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        for (field, guid) in [
            ("DataRepositoryGUID", self.data_repository_guid),
            ("CrawlScheduleGUID", self.crawl_schedule_guid),
            ("CrawlFilterGUID", self.crawl_filter_guid),
        ] {
            if guid.is_nil() {
                return Err(ViewError::invalid(format!("{} must be set", field)));
            }
        }
        require_min("EnumerationsToRetain", self.enumerations_to_retain, 1)?;
        require_min("MaxDrainTasks", self.max_drain_tasks, 1)
    }
}

impl Resource for CrawlPlan {
    const PATH: &'static str = "crawlplans";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrawlOperationState {
    #[default]
    #[serde(rename = "NotStarted")]
    NotStarted,
    #[serde(rename = "Starting")]
    Starting,
    #[serde(rename = "Enumerating")]
    Enumerating,
    #[serde(rename = "Retrieving")]
    Retrieving,
    #[serde(rename = "Deleting")]
    Deleting,
    #[serde(rename = "Stopped")]
    Stopped,
    #[serde(rename = "Canceled")]
    Canceled,
    #[serde(rename = "Success")]
    Success,
    #[serde(rename = "Failed")]
    Failed,
}

/// A single run of a crawl plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrawlOperation {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "CrawlPlanGUID")]
    pub crawl_plan_guid: Uuid,
    #[serde(rename = "CrawlScheduleGUID")]
    pub crawl_schedule_guid: Uuid,
    #[serde(rename = "CrawlFilterGUID")]
    pub crawl_filter_guid: Uuid,
    #[serde(rename = "DataRepositoryGUID")]
    pub data_repository_guid: Uuid,
    pub name: String,
    pub objects_enumerated: i64,
    pub bytes_enumerated: i64,
    pub objects_added: i64,
    pub bytes_added: i64,
    pub objects_updated: i64,
    pub bytes_updated: i64,
    pub objects_deleted: i64,
    pub bytes_deleted: i64,
    pub objects_success: i64,
    pub bytes_success: i64,
    pub objects_failed: i64,
    pub bytes_failed: i64,
    pub enumeration_file: Option<String>,
    pub state: CrawlOperationState,
    pub created_utc: DateTime<Utc>,
    pub start_utc: Option<DateTime<Utc>>,
    pub start_enumeration_utc: Option<DateTime<Utc>>,
    pub start_retrieval_utc: Option<DateTime<Utc>>,
    pub finish_enumeration_utc: Option<DateTime<Utc>>,
    pub finish_retrieval_utc: Option<DateTime<Utc>>,
    pub finish_utc: Option<DateTime<Utc>>,
}

impl CrawlOperation {
    /// True once the operation reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            CrawlOperationState::Stopped
                | CrawlOperationState::Canceled
                | CrawlOperationState::Success
                | CrawlOperationState::Failed
        )
    }
}

impl Validate for CrawlOperation {}

impl Resource for CrawlOperation {
    const PATH: &'static str = "crawloperations";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_interval_guard() {
        assert!(CrawlSchedule::new("hourly", ScheduleInterval::HoursInterval, 1).validate().is_ok());
        assert!(CrawlSchedule::new("never", ScheduleInterval::HoursInterval, 0).validate().is_err());
        assert_eq!(
            serde_json::to_value(ScheduleInterval::DaysInterval).unwrap(),
            serde_json::json!("DaysInterval")
        );
    }

    #[test]
    fn test_filter_sizes() {
        let mut filter = CrawlFilter::new("all");
        assert!(filter.validate().is_ok());

        filter.maximum_size = Some(0);
        assert!(filter.validate().is_err());

        filter.minimum_size = -1;
        filter.maximum_size = None;
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_filter_accepts() {
        let mut filter = CrawlFilter::new("pdfs");
        filter.maximum_size = Some(1024);
        filter.suffix = Some(".pdf".to_string());
        filter.allowed_content_types = vec!["application/pdf".to_string()];

        assert!(filter.accepts("a.pdf", 100, Some("application/pdf")));
        assert!(filter.accepts("dir/a.pdf", 100, Some("APPLICATION/PDF")));
        assert!(!filter.accepts("a.pdf", 0, Some("application/pdf")));
        assert!(!filter.accepts("a.pdf", 2048, Some("application/pdf")));
        assert!(!filter.accepts("a.txt", 100, Some("application/pdf")));
        assert!(!filter.accepts("a.pdf", 100, None));

        filter.include_subdirectories = false;
        assert!(!filter.accepts("dir/a.pdf", 100, Some("application/pdf")));
    }

    #[test]
    fn test_plan_requires_references() {
        let plan = CrawlPlan::new("nightly", Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert!(plan.validate().is_ok());

        let plan = CrawlPlan::new("nightly", Uuid::nil(), Uuid::new_v4(), Uuid::new_v4());
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_operation_finished() {
        let mut operation = CrawlOperation::default();
        assert!(!operation.is_finished());
        operation.state = CrawlOperationState::Retrieving;
        assert!(!operation.is_finished());
        operation.state = CrawlOperationState::Success;
        assert!(operation.is_finished());
    }
}
