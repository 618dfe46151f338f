use uuid::Uuid;

use crate::client::RestClient;
use crate::error::ViewResult;
use crate::models::{Collection, SearchQuery, SearchResult, SemanticCell, SourceDocument};
use crate::url::UrlBuilder;
use crate::validate::Validate;

use super::ResourceMethods;

/// Source documents recorded in one collection.
pub struct DocumentMethods<'a, C> {
    client: &'a C,
    collection_guid: Uuid,
}

impl<'a, C: RestClient + 'a> ResourceMethods<'a, C, Collection> {
    /// Documents in `collection_guid`.
    pub fn documents(&self, collection_guid: Uuid) -> DocumentMethods<'a, C> {
        DocumentMethods {
            client: self.client,
            collection_guid,
        }
    }
}

impl<'a, C: RestClient + 'a> DocumentMethods<'a, C> {
    pub fn collection_guid(&self) -> Uuid {
        self.collection_guid
    }

    fn route(&self) -> ViewResult<UrlBuilder> {
        let config = self.client.config();
        UrlBuilder::tenant_v1(&config.endpoint, config.tenant_guid, "collections")?
            .guid(self.collection_guid)?
            .segment("documents")
    }

    fn document_url(&self, guid: Uuid) -> ViewResult<UrlBuilder> {
        self.route()?.guid(guid)
    }

    pub async fn retrieve(&self, guid: Uuid) -> ViewResult<Option<SourceDocument>> {
        let url = self.document_url(guid)?.build();
        self.client.retrieve(&url).await
    }

    pub async fn retrieve_many(&self) -> ViewResult<Vec<SourceDocument>> {
        let url = self.route()?.build();
        self.client.retrieve_many(&url).await
    }

    pub async fn delete(&self, guid: Uuid) -> ViewResult<bool> {
        let url = self.document_url(guid)?.build();
        self.client.delete(&url).await
    }

    pub async fn exists(&self, guid: Uuid) -> ViewResult<bool> {
        let url = self.document_url(guid)?.build();
        self.client.exists(&url).await
    }

    /// Run a search against the collection.
    ///
    /// The tenant and collection GUIDs in the request body are taken from this
    /// method group, whatever the query carries.
    pub async fn search(&self, query: &SearchQuery) -> ViewResult<Option<SearchResult>> {
        query.validate()?;
        let mut request = query.clone();
        request.tenant_guid = self.client.config().tenant_guid;
        request.collection_guid = self.collection_guid;

        let url = self.route()?.flag("search").build();
        self.client.post(&url, &request).await
    }

    /// Semantic cells extracted from a document; empty when the call fails.
    pub async fn semantic_cells(&self, document_guid: Uuid) -> ViewResult<Vec<SemanticCell>> {
        let url = self.document_url(document_guid)?.segment("semanticcells")?.build();
        self.client.retrieve_many(&url).await
    }
}
