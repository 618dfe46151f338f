use crate::client::RestClient;
use crate::error::ViewResult;
use crate::models::TenantMetadata;

use super::ResourceMethods;

impl<'a, C: RestClient + 'a> ResourceMethods<'a, C, TenantMetadata> {
    /// Retrieve the tenant this client is configured for.
    pub async fn retrieve_self(&self) -> ViewResult<Option<TenantMetadata>> {
        self.retrieve(self.client.config().tenant_guid).await
    }
}
