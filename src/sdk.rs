//! ViewSdk: one entry point with a method group per resource

use uuid::Uuid;

use crate::client::RestClient;
use crate::config::SdkConfig;
use crate::error::ViewResult;
use crate::methods::{ObjectMethods, ReadOnlyMethods, ResourceMethods};
use crate::models::{
    BucketMetadata, Collection, CrawlFilter, CrawlOperation, CrawlPlan, CrawlSchedule, Credential,
    DataRepository, EmbeddingsRule, EncryptionKey, GraphRepository, MetadataRule, ModelConfiguration,
    ModelEndpoint, ModelProfile, Resource, StoragePool, TenantMetadata, UserMaster, VectorRepository,
    WebhookEvent, WebhookRule, WebhookTarget,
};
use crate::remote::RemoteClient;

/// Client SDK for the View REST API.
///
/// Method groups borrow the SDK, so they are cheap to create per call:
///
/// ```no_run
/// # use view_sdk::{SdkConfig, ViewSdk};
/// # use uuid::Uuid;
/// # async fn run() -> view_sdk::ViewResult<()> {
/// let sdk = ViewSdk::new(SdkConfig::new("http://localhost:8000", Uuid::new_v4(), "default"))?;
/// for bucket in sdk.buckets().retrieve_many().await? {
///     println!("{} {}", bucket.guid, bucket.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ViewSdk<C: RestClient = RemoteClient> {
    client: C,
}

impl ViewSdk<RemoteClient> {
    /// Build an SDK backed by a [`RemoteClient`].
    pub fn new(config: SdkConfig) -> ViewResult<Self> {
        Ok(Self::with_client(RemoteClient::new(config)?))
    }

    /// Build an SDK from the `VIEW_*` environment variables.
    pub fn from_env() -> ViewResult<Self> {
        Self::new(SdkConfig::from_env()?)
    }
}

impl<C: RestClient> ViewSdk<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &SdkConfig {
        self.client.config()
    }

    /// Generic method group for any resource type.
    pub fn resource<T: Resource>(&self) -> ResourceMethods<'_, C, T> {
        ResourceMethods::new(&self.client)
    }

    pub fn tenants(&self) -> ResourceMethods<'_, C, TenantMetadata> {
        self.resource()
    }

    pub fn users(&self) -> ResourceMethods<'_, C, UserMaster> {
        self.resource()
    }

    pub fn credentials(&self) -> ResourceMethods<'_, C, Credential> {
        self.resource()
    }

    pub fn storage_pools(&self) -> ResourceMethods<'_, C, StoragePool> {
        self.resource()
    }

    pub fn buckets(&self) -> ResourceMethods<'_, C, BucketMetadata> {
        self.resource()
    }

    /// Objects within one bucket.
    pub fn objects(&self, bucket_guid: Uuid) -> ObjectMethods<'_, C> {
        ObjectMethods::new(&self.client, bucket_guid)
    }

    pub fn collections(&self) -> ResourceMethods<'_, C, Collection> {
        self.resource()
    }

    pub fn metadata_rules(&self) -> ResourceMethods<'_, C, MetadataRule> {
        self.resource()
    }

    pub fn embeddings_rules(&self) -> ResourceMethods<'_, C, EmbeddingsRule> {
        self.resource()
    }

    pub fn vector_repositories(&self) -> ResourceMethods<'_, C, VectorRepository> {
        self.resource()
    }

    pub fn graph_repositories(&self) -> ResourceMethods<'_, C, GraphRepository> {
        self.resource()
    }

    pub fn data_repositories(&self) -> ResourceMethods<'_, C, DataRepository> {
        self.resource()
    }

    pub fn webhook_targets(&self) -> ResourceMethods<'_, C, WebhookTarget> {
        self.resource()
    }

    pub fn webhook_rules(&self) -> ResourceMethods<'_, C, WebhookRule> {
        self.resource()
    }

    pub fn webhook_events(&self) -> ReadOnlyMethods<'_, C, WebhookEvent> {
        ReadOnlyMethods::new(&self.client)
    }

    pub fn crawl_schedules(&self) -> ResourceMethods<'_, C, CrawlSchedule> {
        self.resource()
    }

    pub fn crawl_filters(&self) -> ResourceMethods<'_, C, CrawlFilter> {
        self.resource()
    }

    pub fn crawl_plans(&self) -> ResourceMethods<'_, C, CrawlPlan> {
        self.resource()
    }

    pub fn crawl_operations(&self) -> ReadOnlyMethods<'_, C, CrawlOperation> {
        ReadOnlyMethods::new(&self.client)
    }

    pub fn model_configurations(&self) -> ResourceMethods<'_, C, ModelConfiguration> {
        self.resource()
    }

    pub fn model_endpoints(&self) -> ResourceMethods<'_, C, ModelEndpoint> {
        self.resource()
    }

    pub fn model_profiles(&self) -> ResourceMethods<'_, C, ModelProfile> {
        self.resource()
    }

    pub fn encryption_keys(&self) -> ResourceMethods<'_, C, EncryptionKey> {
        self.resource()
    }
}
