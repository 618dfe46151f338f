//! URL construction for View API routes

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use uuid::Uuid;

use crate::error::{ViewError, ViewResult};

/// Characters left untouched in a path segment or query component (RFC 3986 unreserved).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Object keys keep their `/` separators.
const OBJECT_KEY: &AsciiSet = &COMPONENT.remove(b'/');

/// Builds `{endpoint}/{segment}/...?{k}={v}&...` with each component encoded.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    url: String,
    has_query: bool,
}

impl UrlBuilder {
    pub fn new(endpoint: &str) -> Self {
        Self {
            url: endpoint.trim_end_matches('/').to_string(),
            has_query: false,
        }
    }

    /// `{endpoint}/v1.0/{resource}`
    pub fn v1(endpoint: &str, resource: &str) -> ViewResult<Self> {
        Self::new(endpoint).raw("v1.0").segment(resource)
    }

    /// `{endpoint}/v2.0/{resource}`
    pub fn v2(endpoint: &str, resource: &str) -> ViewResult<Self> {
        Self::new(endpoint).raw("v2.0").segment(resource)
    }

    /// `{endpoint}/v1.0/tenants/{tenant}/{resource}`
    pub fn tenant_v1(endpoint: &str, tenant: Uuid, resource: &str) -> ViewResult<Self> {
        Self::new(endpoint).raw("v1.0/tenants").tenant(tenant).segment(resource)
    }

    /// `{endpoint}/v2.0/tenants/{tenant}/{resource}`
    pub fn tenant_v2(endpoint: &str, tenant: Uuid, resource: &str) -> ViewResult<Self> {
        Self::new(endpoint).raw("v2.0/tenants").tenant(tenant).segment(resource)
    }

    /// Append a fixed, already-safe path.
    fn raw(mut self, path: &str) -> Self {
        self.url.push('/');
        self.url.push_str(path);
        self
    }

    /// Append one encoded path segment.
    pub fn segment(mut self, segment: &str) -> ViewResult<Self> {
        if segment.trim().is_empty() {
            return Err(ViewError::invalid("path segment must not be empty"));
        }
        self.url.push('/');
        self.url.extend(utf8_percent_encode(segment, COMPONENT));
        Ok(self)
    }

    /// Append a tenant GUID. The nil GUID is the default tenant and is allowed.
    pub fn tenant(mut self, tenant: Uuid) -> Self {
        self.url.push('/');
        self.url.push_str(&tenant.hyphenated().to_string());
        self
    }

    /// Append a resource GUID segment; the nil GUID is rejected.
    pub fn guid(self, guid: Uuid) -> ViewResult<Self> {
        if guid.is_nil() {
            return Err(ViewError::invalid("GUID must not be nil"));
        }
        self.segment(&guid.to_string())
    }

    /// Append an object key, preserving `/` between key components.
    pub fn object_key(mut self, key: &str) -> ViewResult<Self> {
        let key = key.trim_start_matches('/');
        if key.is_empty() {
            return Err(ViewError::invalid("object key must not be empty"));
        }
        self.url.push('/');
        self.url.extend(utf8_percent_encode(key, OBJECT_KEY));
        Ok(self)
    }

    /// Append `key=value` to the query string.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.url.extend(utf8_percent_encode(key, COMPONENT));
        self.url.push('=');
        self.url.extend(utf8_percent_encode(value, COMPONENT));
        self
    }

    /// Append a bare query flag such as `?search`.
    pub fn flag(mut self, key: &str) -> Self {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.url.extend(utf8_percent_encode(key, COMPONENT));
        self
    }

    pub fn build(self) -> String {
        self.url
    }
}
