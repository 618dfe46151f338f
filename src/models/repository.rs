//! Vector, graph and data repositories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_min, require_non_empty, require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VectorRepositoryType {
    #[default]
    #[serde(rename = "Pgvector")]
    Pgvector,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VectorRepository {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub repository_type: VectorRepositoryType,
    pub model: String,
    pub dimensionality: i32,
    pub database_hostname: String,
    pub database_name: String,
    pub schema_name: String,
    pub database_table: String,
    pub database_port: i32,
    pub database_user: String,
    pub database_password: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl VectorRepository {
    pub fn pgvector(name: &str, model: &str, dimensionality: i32) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            repository_type: VectorRepositoryType::Pgvector,
            model: model.to_string(),
            dimensionality,
            database_hostname: "localhost".to_string(),
            database_name: "vectordb".to_string(),
            schema_name: "public".to_string(),
            database_table: "minilm".to_string(),
            database_port: 5432,
            database_user: "postgres".to_string(),
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for VectorRepository {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("Model", &self.model)?;
        require_min("Dimensionality", self.dimensionality, 1)?;
        require_non_empty("DatabaseHostname", &self.database_hostname)?;
        require_non_empty("DatabaseName", &self.database_name)?;
        require_non_empty("DatabaseTable", &self.database_table)?;
        require_range("DatabasePort", self.database_port, 0, 65535)
    }
}

impl Resource for VectorRepository {
    const PATH: &'static str = "vectorrepositories";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphRepositoryType {
    #[default]
    #[serde(rename = "LiteGraph")]
    LiteGraph,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GraphRepository {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub repository_type: GraphRepositoryType,
    pub endpoint_url: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: i32,
    pub ssl: bool,
    pub graph_identifier: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl GraphRepository {
    pub fn lite_graph(name: &str, endpoint_url: &str, graph_identifier: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            repository_type: GraphRepositoryType::LiteGraph,
            endpoint_url: Some(endpoint_url.to_string()),
            graph_identifier: Some(graph_identifier.to_string()),
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for GraphRepository {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_range("Port", self.port, 0, 65535)?;
        if self.endpoint_url.is_none() && self.hostname.is_none() {
            return Err(ViewError::invalid("either EndpointUrl or Hostname must be set"));
        }
        Ok(())
    }
}

impl Resource for GraphRepository {
    const PATH: &'static str = "graphrepositories";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Source system a crawler reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataRepositoryType {
    #[default]
    #[serde(rename = "File")]
    File,
    #[serde(rename = "CIFS")]
    Cifs,
    #[serde(rename = "NFS")]
    Nfs,
    #[serde(rename = "AmazonS3")]
    AmazonS3,
    #[serde(rename = "AzureBlob")]
    AzureBlob,
    #[serde(rename = "Web")]
    Web,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataRepository {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "OwnerGUID")]
    pub owner_guid: Uuid,
    pub name: String,
    pub repository_type: DataRepositoryType,
    pub use_ssl: bool,
    pub include_subdirectories: bool,
    pub disk_directory: Option<String>,
    pub s3_endpoint_url: Option<String>,
    pub s3_base_url: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub s3_bucket_name: Option<String>,
    pub s3_region: Option<String>,
    pub azure_endpoint_url: Option<String>,
    pub azure_account_name: Option<String>,
    pub azure_container_name: Option<String>,
    pub azure_access_key: Option<String>,
    pub cifs_hostname: Option<String>,
    pub cifs_username: Option<String>,
    pub cifs_password: Option<String>,
    pub cifs_share_name: Option<String>,
    pub nfs_hostname: Option<String>,
    pub nfs_user_id: i32,
    pub nfs_group_id: i32,
    pub nfs_share_name: Option<String>,
    pub nfs_version: Option<String>,
    pub web_authentication: Option<String>,
    pub web_username: Option<String>,
    pub web_password: Option<String>,
    pub web_start_url: Option<String>,
    pub web_user_agent: Option<String>,
    pub web_max_depth: i32,
    pub web_max_parallel_tasks: i32,
    pub web_crawl_delay_ms: i32,
    pub created_utc: DateTime<Utc>,
}

impl DataRepository {
    pub fn new(name: &str, repository_type: DataRepositoryType) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            repository_type,
            include_subdirectories: true,
            web_max_depth: 5,
            web_max_parallel_tasks: 8,
            web_crawl_delay_ms: 100,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for DataRepository {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        let missing = match self.repository_type {
            DataRepositoryType::File => self.disk_directory.is_none().then_some("DiskDirectory"),
            DataRepositoryType::AmazonS3 => self.s3_bucket_name.is_none().then_some("S3BucketName"),
            DataRepositoryType::AzureBlob => self.azure_container_name.is_none().then_some("AzureContainerName"),
            DataRepositoryType::Cifs => self.cifs_share_name.is_none().then_some("CifsShareName"),
            DataRepositoryType::Nfs => self.nfs_share_name.is_none().then_some("NfsShareName"),
            DataRepositoryType::Web => self.web_start_url.is_none().then_some("WebStartUrl"),
        };
        if let Some(field) = missing {
            return Err(ViewError::invalid(format!(
                "{} is required for repository type {:?}",
                field, self.repository_type
            )));
        }
        require_min("WebMaxDepth", self.web_max_depth, 0)?;
        require_min("WebMaxParallelTasks", self.web_max_parallel_tasks, 1)?;
        require_min("WebCrawlDelayMs", self.web_crawl_delay_ms, 0)
    }
}

impl Resource for DataRepository {
    const PATH: &'static str = "datarepositories";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
