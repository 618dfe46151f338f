//! Data models for the View SDK
//!
//! Every type mirrors a resource of the View REST API. Wire names are PascalCase
//! with `GUID` spelled out; enums serialize to their declared strings and reject
//! unknown values.

pub mod api_error;
pub mod collection;
pub mod crawl;
pub mod enumeration;
pub mod model_config;
pub mod repository;
pub mod rules;
pub mod search;
pub mod storage;
pub mod tenant;
pub mod webhook;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::validate::Validate;

pub use api_error::{ApiErrorEnum, ApiErrorResponse};
pub use collection::{Collection, SemanticCell, SemanticCellType, SemanticChunk, SourceDocument};
pub use crawl::{CrawlFilter, CrawlOperation, CrawlOperationState, CrawlPlan, CrawlSchedule, ScheduleInterval};
pub use enumeration::{EnumerationOrder, EnumerationQuery, EnumerationResult, Timestamp};
pub use model_config::{ModelApiType, ModelConfiguration, ModelEndpoint, ModelProfile};
pub use repository::{
    DataRepository, DataRepositoryType, GraphRepository, GraphRepositoryType, VectorRepository,
    VectorRepositoryType,
};
pub use rules::{EmbeddingsGenerator, EmbeddingsRule, MetadataRule};
pub use search::{SearchQuery, SearchResult};
pub use storage::{
    BucketCategory, BucketMetadata, CompressionType, EncryptionKey, ObjectMetadata, ObjectWriteMode,
    StoragePool, StorageProvider,
};
pub use tenant::{Credential, TenantMetadata, UserMaster};
pub use webhook::{WebhookEvent, WebhookEventType, WebhookRule, WebhookTarget};

/// A tenant-scoped REST resource addressed by GUID.
///
/// `PATH` is the route segment under `v1.0/tenants/{tenant}/` (and `v2.0/...`
/// for enumeration). Resources with `TENANT_SCOPED = false` live directly under
/// `v1.0/`.
pub trait Resource: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    const PATH: &'static str;
    const TENANT_SCOPED: bool = true;

    fn guid(&self) -> Uuid;
}
