//! Storage pools, buckets, objects and encryption keys

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_min, require_non_empty, Validate};

/// Backend that physically stores a pool's objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageProvider {
    #[default]
    #[serde(rename = "Disk")]
    Disk,
    #[serde(rename = "AwsS3")]
    AwsS3,
    #[serde(rename = "AzureBlob")]
    AzureBlob,
    #[serde(rename = "CIFS")]
    Cifs,
    #[serde(rename = "NFS")]
    Nfs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionType {
    #[default]
    #[serde(rename = "None")]
    Uncompressed,
    #[serde(rename = "Gzip")]
    Gzip,
    #[serde(rename = "Zip")]
    Zip,
}

/// How object data is named inside the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectWriteMode {
    #[default]
    #[serde(rename = "GUID")]
    Guid,
    #[serde(rename = "Key")]
    Key,
}

/// Category of data a bucket holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketCategory {
    #[default]
    #[serde(rename = "Data")]
    Data,
    #[serde(rename = "Metadata")]
    Metadata,
    #[serde(rename = "Embeddings")]
    Embeddings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StoragePool {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "EncryptionKeyGUID")]
    pub encryption_key_guid: Option<Uuid>,
    pub name: String,
    pub provider: StorageProvider,
    pub write_mode: ObjectWriteMode,
    pub use_ssl: bool,
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub aws_region: Option<String>,
    pub aws_bucket: Option<String>,
    pub aws_base_domain: Option<String>,
    pub aws_base_url: Option<String>,
    pub disk_directory: Option<String>,
    pub azure_account: Option<String>,
    pub azure_container: Option<String>,
    pub compress: CompressionType,
    pub enable_read_caching: bool,
    pub created_utc: DateTime<Utc>,
}

impl StoragePool {
    /// A pool writing to a local directory on the storage node.
    pub fn disk(name: &str, directory: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            provider: StorageProvider::Disk,
            disk_directory: Some(directory.to_string()),
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

fn require_set(field: &str, value: &Option<String>, provider: StorageProvider) -> ViewResult<()> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ViewError::invalid(format!("{} is required for provider {:?}", field, provider))),
    }
}

impl Validate for StoragePool {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        match self.provider {
            StorageProvider::Disk | StorageProvider::Cifs | StorageProvider::Nfs => {
                require_set("DiskDirectory", &self.disk_directory, self.provider)
            }
            StorageProvider::AwsS3 => {
                require_set("AwsBucket", &self.aws_bucket, self.provider)?;
                require_set("AccessKey", &self.access_key, self.provider)?;
                require_set("SecretKey", &self.secret_key, self.provider)
            }
            StorageProvider::AzureBlob => {
                require_set("AzureAccount", &self.azure_account, self.provider)?;
                require_set("AzureContainer", &self.azure_container, self.provider)
            }
        }
    }
}

impl Resource for StoragePool {
    const PATH: &'static str = "pools";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BucketMetadata {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "PoolGUID")]
    pub pool_guid: Uuid,
    #[serde(rename = "OwnerGUID")]
    pub owner_guid: Uuid,
    pub category: BucketCategory,
    pub name: String,
    pub region_string: String,
    pub versioning: bool,
    pub retention_minutes: Option<i32>,
    pub max_upload_size: Option<i64>,
    pub max_multipart_upload_seconds: i32,
    pub last_access_utc: DateTime<Utc>,
    pub created_utc: DateTime<Utc>,
}

impl BucketMetadata {
    pub fn new(name: &str, pool_guid: Uuid, category: BucketCategory) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::new_v4(),
            pool_guid,
            category,
            name: name.to_string(),
            region_string: "us-west-1".to_string(),
            max_multipart_upload_seconds: 604_800,
            last_access_utc: now,
            created_utc: now,
            ..Self::default()
        }
    }
}

impl Validate for BucketMetadata {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        if self.pool_guid.is_nil() {
            return Err(ViewError::invalid("PoolGUID must be set"));
        }
        if let Some(minutes) = self.retention_minutes {
            require_min("RetentionMinutes", minutes, 1)?;
        }
        if let Some(size) = self.max_upload_size {
            require_min("MaxUploadSize", size, 1)?;
        }
        require_min("MaxMultipartUploadSeconds", self.max_multipart_upload_seconds, 1)
    }
}

impl Resource for BucketMetadata {
    const PATH: &'static str = "buckets";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Metadata describing one stored object version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ObjectMetadata {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "NodeGUID")]
    pub node_guid: Uuid,
    #[serde(rename = "PoolGUID")]
    pub pool_guid: Uuid,
    #[serde(rename = "BucketGUID")]
    pub bucket_guid: Uuid,
    #[serde(rename = "OwnerGUID")]
    pub owner_guid: Uuid,
    pub key: String,
    pub version: String,
    pub is_latest: bool,
    pub is_delete_marker: bool,
    pub is_local: bool,
    pub content_type: String,
    pub document_type: Option<String>,
    pub source_url: Option<String>,
    #[serde(rename = "MD5Hash")]
    pub md5_hash: Option<String>,
    #[serde(rename = "SHA1Hash")]
    pub sha1_hash: Option<String>,
    #[serde(rename = "SHA256Hash")]
    pub sha256_hash: Option<String>,
    pub is_encrypted: bool,
    pub write_mode: ObjectWriteMode,
    pub compression_type: CompressionType,
    pub content_length: i64,
    pub compressed_length: i64,
    pub encrypted_length: i64,
    pub last_access_utc: DateTime<Utc>,
    pub last_modified_utc: DateTime<Utc>,
    pub expiration_utc: Option<DateTime<Utc>>,
    pub created_utc: DateTime<Utc>,
}

impl ObjectMetadata {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// An object without an expiration never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_utc.map_or(false, |expiration| expiration <= now)
    }
}

impl Validate for ObjectMetadata {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Key", &self.key)?;
        require_min("ContentLength", self.content_length, 0)
    }
}

/// Symmetric key material used to encrypt pool data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EncryptionKey {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "OwnerGUID")]
    pub owner_guid: Uuid,
    pub key_base64: Option<String>,
    pub key_hex: Option<String>,
    pub iv_base64: Option<String>,
    pub iv_hex: Option<String>,
    pub salt_base64: Option<String>,
    pub salt_hex: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl Validate for EncryptionKey {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        if self.key_base64.is_none() && self.key_hex.is_none() {
            return Err(ViewError::invalid("either KeyBase64 or KeyHex must be set"));
        }
        Ok(())
    }
}

impl Resource for EncryptionKey {
    const PATH: &'static str = "encryptionkeys";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
