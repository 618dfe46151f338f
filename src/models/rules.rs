//! Metadata and embeddings processing rules
//!
//! Rules are opaque server-side configuration describing how uploaded objects
//! become searchable metadata and vectors. The SDK only checks field bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::ViewResult;
use crate::validate::{require_min, require_non_empty, require_range, Validate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetadataRule {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "BucketGUID")]
    pub bucket_guid: Option<Uuid>,
    pub name: String,
    pub content_type: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub processing_endpoint: String,
    pub processing_access_key: Option<String>,
    pub cleanup_endpoint: Option<String>,
    pub cleanup_access_key: Option<String>,
    pub type_detector_endpoint: Option<String>,
    pub type_detector_access_key: Option<String>,
    pub semantic_cell_endpoint: Option<String>,
    pub semantic_cell_access_key: Option<String>,
    pub max_chunk_content_length: i32,
    pub shift_size: i32,
    pub udr_endpoint: Option<String>,
    pub udr_access_key: Option<String>,
    pub data_catalog_endpoint: Option<String>,
    pub data_catalog_type: Option<String>,
    pub data_catalog_access_key: Option<String>,
    pub data_catalog_collection: Option<String>,
    #[serde(rename = "GraphRepositoryGUID")]
    pub graph_repository_guid: Option<Uuid>,
    pub top_terms: i32,
    pub case_insensitive: bool,
    pub include_flattened: bool,
    #[serde(rename = "TargetBucketGUID")]
    pub target_bucket_guid: Option<Uuid>,
    pub max_content_length: i64,
    pub created_utc: DateTime<Utc>,
}

impl MetadataRule {
    pub fn new(name: &str, content_type: &str, processing_endpoint: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            content_type: content_type.to_string(),
            processing_endpoint: processing_endpoint.to_string(),
            max_chunk_content_length: 512,
            shift_size: 512,
            top_terms: 25,
            case_insensitive: true,
            include_flattened: true,
            max_content_length: 16 * 1024 * 1024,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for MetadataRule {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("ContentType", &self.content_type)?;
        require_min("MaxChunkContentLength", self.max_chunk_content_length, 1)?;
        require_range("ShiftSize", self.shift_size, 1, self.max_chunk_content_length)?;
        require_min("TopTerms", self.top_terms, 0)?;
        require_min("MaxContentLength", self.max_content_length, 1)
    }
}

impl Resource for MetadataRule {
    const PATH: &'static str = "metadatarules";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Service used to turn chunk content into vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmbeddingsGenerator {
    #[default]
    #[serde(rename = "LCProxy")]
    LcProxy,
    #[serde(rename = "OpenAI")]
    OpenAi,
    #[serde(rename = "Ollama")]
    Ollama,
    #[serde(rename = "VoyageAI")]
    VoyageAi,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmbeddingsRule {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "BucketGUID")]
    pub bucket_guid: Option<Uuid>,
    pub name: String,
    pub content_type: String,
    #[serde(rename = "GraphRepositoryGUID")]
    pub graph_repository_guid: Option<Uuid>,
    #[serde(rename = "VectorRepositoryGUID")]
    pub vector_repository_guid: Option<Uuid>,
    pub processing_endpoint: Option<String>,
    pub processing_access_key: Option<String>,
    pub embeddings_server_url: Option<String>,
    pub embeddings_server_api_key: Option<String>,
    pub embeddings_generator: EmbeddingsGenerator,
    pub embeddings_generator_url: Option<String>,
    pub embeddings_generator_api_key: Option<String>,
    pub embeddings_model: Option<String>,
    pub batch_size: i32,
    pub max_generator_tasks: i32,
    pub max_retries: i32,
    pub max_failures: i32,
    pub vector_store_url: Option<String>,
    pub vector_store_access_key: Option<String>,
    pub max_content_length: i64,
    pub created_utc: DateTime<Utc>,
}

impl EmbeddingsRule {
    pub fn new(name: &str, content_type: &str, generator: EmbeddingsGenerator) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            content_type: content_type.to_string(),
            embeddings_generator: generator,
            batch_size: 16,
            max_generator_tasks: 16,
            max_retries: 3,
            max_failures: 3,
            max_content_length: 16 * 1024 * 1024,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for EmbeddingsRule {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("ContentType", &self.content_type)?;
        require_min("BatchSize", self.batch_size, 1)?;
        require_min("MaxGeneratorTasks", self.max_generator_tasks, 1)?;
        require_min("MaxRetries", self.max_retries, 0)?;
        require_min("MaxFailures", self.max_failures, 1)?;
        require_min("MaxContentLength", self.max_content_length, 1)
    }
}

impl Resource for EmbeddingsRule {
    const PATH: &'static str = "embeddingsrules";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
