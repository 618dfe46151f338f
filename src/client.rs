//! RestClient trait: the generic verbs every resource wrapper calls
//!
//! Implementors only provide [`RestClient::send`]; the typed verbs are built on
//! top of it once. Response handling:
//! - 2xx with a body: parsed as JSON into the target type.
//! - 2xx with an empty body: `None`.
//! - non-2xx: logged, then `None`/`false`, or [`ViewError::Api`] in strict mode.
//! - transport failure: always an error.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::SdkConfig;
use crate::error::{ViewError, ViewResult};
use crate::models::{ApiErrorResponse, EnumerationResult};

/// A request payload with its content type.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub content_type: String,
    pub data: Bytes,
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> ViewResult<Self> {
        Ok(Self {
            content_type: "application/json".to_string(),
            data: Bytes::from(serde_json::to_vec(value)?),
        })
    }

    pub fn bytes(content_type: &str, data: Bytes) -> Self {
        Self {
            content_type: content_type.to_string(),
            data,
        }
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn has_body(&self) -> bool {
        !self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Unified client interface for the View REST API.
///
/// Implemented by:
/// - `RemoteClient`: reqwest transport with bearer authentication
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Configuration the client was built with
    fn config(&self) -> &SdkConfig;

    /// Perform one HTTP exchange
    async fn send(&self, method: Method, url: &str, body: Option<RequestBody>) -> ViewResult<RawResponse>;

    /// PUT an object and read back the stored version
    async fn create<T>(&self, url: &str, obj: &T) -> ViewResult<Option<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.create_as::<T, T>(url, obj).await
    }

    /// PUT an object whose response is a different type
    async fn create_as<Req, Resp>(&self, url: &str, obj: &Req) -> ViewResult<Option<Resp>>
    where
        Req: Serialize + Send + Sync,
        Resp: DeserializeOwned + Send,
    {
        let response = self.send(Method::PUT, url, Some(RequestBody::json(obj)?)).await?;
        parse_optional(self.config(), &Method::PUT, url, response)
    }

    /// GET a single object
    async fn retrieve<T>(&self, url: &str) -> ViewResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.send(Method::GET, url, None).await?;
        parse_optional(self.config(), &Method::GET, url, response)
    }

    /// GET a JSON array; empty when the call fails
    async fn retrieve_many<T>(&self, url: &str) -> ViewResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.send(Method::GET, url, None).await?;
        Ok(parse_optional::<Vec<T>>(self.config(), &Method::GET, url, response)?.unwrap_or_default())
    }

    /// PUT an existing object
    async fn update<T>(&self, url: &str, obj: &T) -> ViewResult<Option<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let response = self.send(Method::PUT, url, Some(RequestBody::json(obj)?)).await?;
        parse_optional(self.config(), &Method::PUT, url, response)
    }

    /// DELETE; true on 2xx
    async fn delete(&self, url: &str) -> ViewResult<bool> {
        let response = self.send(Method::DELETE, url, None).await?;
        accept(self.config(), &Method::DELETE, url, response)
    }

    /// HEAD; true on 2xx. A non-2xx status is an answer, never an error.
    async fn exists(&self, url: &str) -> ViewResult<bool> {
        let response = self.send(Method::HEAD, url, None).await?;
        Ok(response.is_success())
    }

    /// GET one enumeration page
    async fn enumerate<T>(&self, url: &str) -> ViewResult<Option<EnumerationResult<T>>>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.send(Method::GET, url, None).await?;
        parse_optional(self.config(), &Method::GET, url, response)
    }

    /// POST a JSON body and parse the response
    async fn post<Req, Resp>(&self, url: &str, obj: &Req) -> ViewResult<Option<Resp>>
    where
        Req: Serialize + Send + Sync,
        Resp: DeserializeOwned + Send,
    {
        let response = self.send(Method::POST, url, Some(RequestBody::json(obj)?)).await?;
        parse_optional(self.config(), &Method::POST, url, response)
    }

    /// POST without a body; true on 2xx
    async fn post_action(&self, url: &str) -> ViewResult<bool> {
        let response = self.send(Method::POST, url, None).await?;
        accept(self.config(), &Method::POST, url, response)
    }

    /// PUT raw bytes; true on 2xx
    async fn put_bytes(&self, url: &str, content_type: &str, data: Bytes) -> ViewResult<bool> {
        let response = self
            .send(Method::PUT, url, Some(RequestBody::bytes(content_type, data)))
            .await?;
        accept(self.config(), &Method::PUT, url, response)
    }

    /// GET raw bytes
    async fn get_bytes(&self, url: &str) -> ViewResult<Option<Bytes>> {
        let response = self.send(Method::GET, url, None).await?;
        if response.is_success() {
            return Ok(Some(response.body));
        }
        failure(self.config(), &Method::GET, url, response)?;
        Ok(None)
    }
}

pub(crate) fn parse_optional<T: DeserializeOwned>(
    config: &SdkConfig,
    method: &Method,
    url: &str,
    response: RawResponse,
) -> ViewResult<Option<T>> {
    if !response.is_success() {
        failure(config, method, url, response)?;
        return Ok(None);
    }
    if !response.has_body() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&response.body)?))
}

fn accept(config: &SdkConfig, method: &Method, url: &str, response: RawResponse) -> ViewResult<bool> {
    if response.is_success() {
        return Ok(true);
    }
    failure(config, method, url, response)?;
    Ok(false)
}

/// Log a non-success response; in strict mode turn it into an error.
fn failure(config: &SdkConfig, method: &Method, url: &str, response: RawResponse) -> ViewResult<()> {
    let api_error = serde_json::from_slice::<ApiErrorResponse>(&response.body).ok();
    match &api_error {
        Some(error) => warn!(status = response.status, %error, "{} {} failed", method, url),
        None => warn!(status = response.status, "{} {} failed", method, url),
    }
    if config.strict {
        return Err(ViewError::Api {
            status: response.status,
            response: api_error,
        });
    }
    Ok(())
}
