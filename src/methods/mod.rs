//! Per-resource method groups
//!
//! [`ResourceMethods`] gives every [`Resource`] the same CRUD and enumeration
//! calls; resource-specific calls are inherent impls on the concrete
//! `ResourceMethods<'_, C, T>` in the submodules.

mod crawl;
mod documents;
mod objects;
mod tenants;

pub use documents::DocumentMethods;
pub use objects::ObjectMethods;

use futures::stream::{self, Stream, TryStreamExt};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::client::RestClient;
use crate::error::{ViewError, ViewResult};
use crate::models::{EnumerationQuery, EnumerationResult, Resource};
use crate::url::UrlBuilder;
use crate::validate::Validate;

/// CRUD and enumeration for one resource type, scoped to the configured tenant.
pub struct ResourceMethods<'a, C, T> {
    client: &'a C,
    _resource: PhantomData<fn() -> T>,
}

impl<'a, C, T> Clone for ResourceMethods<'a, C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C, T> Copy for ResourceMethods<'a, C, T> {}

impl<'a, C: RestClient + 'a, T: Resource> ResourceMethods<'a, C, T> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `v1.0` route for CRUD, `v2.0` route for enumeration
    fn route(&self, enumeration: bool) -> ViewResult<UrlBuilder> {
        let config = self.client.config();
        match (T::TENANT_SCOPED, enumeration) {
            (true, false) => UrlBuilder::tenant_v1(&config.endpoint, config.tenant_guid, T::PATH),
            (true, true) => UrlBuilder::tenant_v2(&config.endpoint, config.tenant_guid, T::PATH),
            (false, false) => UrlBuilder::v1(&config.endpoint, T::PATH),
            (false, true) => UrlBuilder::v2(&config.endpoint, T::PATH),
        }
    }

    fn item_url(&self, guid: Uuid) -> ViewResult<String> {
        let route = self.route(false)?;
        if T::TENANT_SCOPED {
            Ok(route.guid(guid)?.build())
        } else {
            Ok(route.tenant(guid).build())
        }
    }

    /// Create a resource; the server's stored copy is returned.
    pub async fn create(&self, obj: &T) -> ViewResult<Option<T>> {
        obj.validate()?;
        let url = self.route(false)?.build();
        self.client.create(&url, obj).await
    }

    pub async fn retrieve(&self, guid: Uuid) -> ViewResult<Option<T>> {
        let url = self.item_url(guid)?;
        self.client.retrieve(&url).await
    }

    /// All resources of this type; empty when the call fails.
    pub async fn retrieve_many(&self) -> ViewResult<Vec<T>> {
        let url = self.route(false)?.build();
        self.client.retrieve_many(&url).await
    }

    pub async fn update(&self, obj: &T) -> ViewResult<Option<T>> {
        obj.validate()?;
        let url = self.item_url(obj.guid())?;
        self.client.update(&url, obj).await
    }

    pub async fn delete(&self, guid: Uuid) -> ViewResult<bool> {
        let url = self.item_url(guid)?;
        self.client.delete(&url).await
    }

    pub async fn exists(&self, guid: Uuid) -> ViewResult<bool> {
        let url = self.item_url(guid)?;
        self.client.exists(&url).await
    }

    /// Fetch one page.
    pub async fn enumerate(&self, query: &EnumerationQuery) -> ViewResult<Option<EnumerationResult<T>>> {
        query.validate()?;
        let url = query.apply(self.route(true)?).build();
        self.client.enumerate(&url).await
    }

    /// Stream every record, following continuation tokens until the server
    /// reports the end of results.
    pub fn enumerate_all(&self, query: EnumerationQuery) -> impl Stream<Item = ViewResult<T>> + 'a {
        let methods = *self;
        stream::try_unfold(Some(query), move |state| methods.next_page(state))
            .map_ok(|records| stream::iter(records.into_iter().map(Ok::<T, ViewError>)))
            .try_flatten()
    }

    async fn next_page(
        self,
        state: Option<EnumerationQuery>,
    ) -> ViewResult<Option<(Vec<T>, Option<EnumerationQuery>)>> {
        let query = match state {
            Some(query) => query,
            None => return Ok(None),
        };
        let page = match self.enumerate(&query).await? {
            Some(page) => page,
            None => return Ok(None),
        };
        let next = page
            .next_token()
            .map(|token| query.clone().with_continuation_token(token));
        Ok(Some((page.objects, next)))
    }
}

/// Resources the server creates on its own: read, enumerate and delete only.
pub struct ReadOnlyMethods<'a, C, T> {
    inner: ResourceMethods<'a, C, T>,
}

impl<'a, C: RestClient + 'a, T: Resource> ReadOnlyMethods<'a, C, T> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self {
            inner: ResourceMethods::new(client),
        }
    }

    pub async fn retrieve(&self, guid: Uuid) -> ViewResult<Option<T>> {
        self.inner.retrieve(guid).await
    }

    pub async fn retrieve_many(&self) -> ViewResult<Vec<T>> {
        self.inner.retrieve_many().await
    }

    pub async fn exists(&self, guid: Uuid) -> ViewResult<bool> {
        self.inner.exists(guid).await
    }

    pub async fn delete(&self, guid: Uuid) -> ViewResult<bool> {
        self.inner.delete(guid).await
    }

    pub async fn enumerate(&self, query: &EnumerationQuery) -> ViewResult<Option<EnumerationResult<T>>> {
        self.inner.enumerate(query).await
    }

    pub fn enumerate_all(&self, query: EnumerationQuery) -> impl Stream<Item = ViewResult<T>> + 'a {
        self.inner.enumerate_all(query)
    }
}
