use bytes::Bytes;
use uuid::Uuid;

use crate::client::RestClient;
use crate::error::ViewResult;
use crate::models::{BucketMetadata, EnumerationQuery, EnumerationResult, ObjectMetadata};
use crate::url::UrlBuilder;
use crate::validate::Validate;

use super::ResourceMethods;

/// Object data and metadata within one bucket.
///
/// Keys may contain `/`; each key component is percent-encoded separately.
pub struct ObjectMethods<'a, C> {
    client: &'a C,
    bucket_guid: Uuid,
}

impl<'a, C: RestClient + 'a> ResourceMethods<'a, C, BucketMetadata> {
    /// Objects stored in `bucket_guid`.
    pub fn objects(&self, bucket_guid: Uuid) -> ObjectMethods<'a, C> {
        ObjectMethods {
            client: self.client,
            bucket_guid,
        }
    }
}

impl<'a, C: RestClient + 'a> ObjectMethods<'a, C> {
    pub(crate) fn new(client: &'a C, bucket_guid: Uuid) -> Self {
        Self { client, bucket_guid }
    }

    pub fn bucket_guid(&self) -> Uuid {
        self.bucket_guid
    }

    fn bucket_route(&self, enumeration: bool) -> ViewResult<UrlBuilder> {
        let config = self.client.config();
        let route = if enumeration {
            UrlBuilder::tenant_v2(&config.endpoint, config.tenant_guid, "buckets")?
        } else {
            UrlBuilder::tenant_v1(&config.endpoint, config.tenant_guid, "buckets")?
        };
        route.guid(self.bucket_guid)?.segment("objects")
    }

    fn object_url(&self, key: &str) -> ViewResult<UrlBuilder> {
        self.bucket_route(false)?.object_key(key)
    }

    /// Store `data` under `key`, replacing the latest version.
    pub async fn write(&self, key: &str, content_type: &str, data: Bytes) -> ViewResult<bool> {
        let url = self.object_url(key)?.build();
        self.client.put_bytes(&url, content_type, data).await
    }

    /// Latest version of the object's data.
    pub async fn read(&self, key: &str) -> ViewResult<Option<Bytes>> {
        let url = self.object_url(key)?.build();
        self.client.get_bytes(&url).await
    }

    pub async fn retrieve_metadata(&self, key: &str) -> ViewResult<Option<ObjectMetadata>> {
        let url = self.object_url(key)?.flag("md").build();
        self.client.retrieve(&url).await
    }

    pub async fn exists(&self, key: &str) -> ViewResult<bool> {
        let url = self.object_url(key)?.build();
        self.client.exists(&url).await
    }

    pub async fn delete(&self, key: &str) -> ViewResult<bool> {
        let url = self.object_url(key)?.build();
        self.client.delete(&url).await
    }

    /// One page of object metadata.
    pub async fn enumerate(&self, query: &EnumerationQuery) -> ViewResult<Option<EnumerationResult<ObjectMetadata>>> {
        query.validate()?;
        let url = query.apply(self.bucket_route(true)?).build();
        self.client.enumerate(&url).await
    }
}
