//! Error bodies returned by the View server

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side error taxonomy.
///
/// The SDK only deserializes these; it never retries on or reinterprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorEnum {
    #[serde(rename = "AuthenticationFailed")]
    AuthenticationFailed,
    #[serde(rename = "AuthorizationFailed")]
    AuthorizationFailed,
    #[serde(rename = "BadGateway")]
    BadGateway,
    #[serde(rename = "BadRequest")]
    BadRequest,
    #[serde(rename = "Conflict")]
    Conflict,
    #[serde(rename = "DeserializationError")]
    DeserializationError,
    #[serde(rename = "Gone")]
    Gone,
    #[serde(rename = "Inactive")]
    Inactive,
    #[serde(rename = "InternalError")]
    InternalError,
    #[serde(rename = "InvalidChecksum")]
    InvalidChecksum,
    #[serde(rename = "InvalidContentType")]
    InvalidContentType,
    #[serde(rename = "InvalidEncryptionKey")]
    InvalidEncryptionKey,
    #[serde(rename = "InvalidRange")]
    InvalidRange,
    #[serde(rename = "InUse")]
    InUse,
    #[serde(rename = "Locked")]
    Locked,
    #[serde(rename = "MethodNotAllowed")]
    MethodNotAllowed,
    #[serde(rename = "MissingContentLength")]
    MissingContentLength,
    #[serde(rename = "NoSuchBucket")]
    NoSuchBucket,
    #[serde(rename = "NoSuchKey")]
    NoSuchKey,
    #[serde(rename = "NotEmpty")]
    NotEmpty,
    #[serde(rename = "NotFound")]
    NotFound,
    #[serde(rename = "NotImplemented")]
    NotImplemented,
    #[serde(rename = "PreconditionFailed")]
    PreconditionFailed,
    #[serde(rename = "QuotaExceeded")]
    QuotaExceeded,
    #[serde(rename = "RequestTimeout")]
    RequestTimeout,
    #[serde(rename = "ServiceUnavailable")]
    ServiceUnavailable,
    #[serde(rename = "SlowDown")]
    SlowDown,
    #[serde(rename = "TokenExpired")]
    TokenExpired,
    #[serde(rename = "TooLarge")]
    TooLarge,
    #[serde(rename = "TooManyRequests")]
    TooManyRequests,
    #[serde(rename = "UnsupportedMediaType")]
    UnsupportedMediaType,
}

impl ApiErrorEnum {
    /// HTTP status the server pairs with this error.
    pub fn status_code(&self) -> u16 {
        use ApiErrorEnum::*;
        match self {
            AuthenticationFailed | TokenExpired => 401,
            AuthorizationFailed | Inactive => 403,
            BadRequest | DeserializationError | InvalidChecksum | InvalidContentType
            | InvalidEncryptionKey => 400,
            NotFound | NoSuchBucket | NoSuchKey => 404,
            MethodNotAllowed => 405,
            RequestTimeout => 408,
            Conflict | InUse | NotEmpty => 409,
            Gone => 410,
            MissingContentLength => 411,
            PreconditionFailed => 412,
            TooLarge => 413,
            UnsupportedMediaType => 415,
            InvalidRange => 416,
            Locked => 423,
            QuotaExceeded | TooManyRequests | SlowDown => 429,
            InternalError => 500,
            NotImplemented => 501,
            BadGateway => 502,
            ServiceUnavailable => 503,
        }
    }

    pub fn description(&self) -> &'static str {
        use ApiErrorEnum::*;
        match self {
            AuthenticationFailed => "Your authentication material was not accepted.",
            AuthorizationFailed => "Your authentication material was accepted, but you are not authorized to perform this request.",
            BadGateway => "An upstream service returned an invalid response.",
            BadRequest => "We were unable to process your request.",
            Conflict => "Operation failed as it would create a conflicting object.",
            DeserializationError => "Your request body was invalid and could not be deserialized.",
            Gone => "The requested resource is no longer available.",
            Inactive => "Your account, credentials, or associated resources are marked as inactive.",
            InternalError => "An internal error has been encountered.",
            InvalidChecksum => "The supplied checksum does not match the content.",
            InvalidContentType => "The supplied content type is not valid for this request.",
            InvalidEncryptionKey => "The supplied encryption key is invalid.",
            InvalidRange => "An invalid range has been supplied and cannot be fulfilled.",
            InUse => "The requested resource is in use.",
            Locked => "The requested resource is locked.",
            MethodNotAllowed => "The HTTP method is not allowed for this resource.",
            MissingContentLength => "A content length is required for this request.",
            NoSuchBucket => "The requested bucket does not exist.",
            NoSuchKey => "The requested object key does not exist.",
            NotEmpty => "The specified resource is not empty.",
            NotFound => "The requested resource was not found.",
            NotImplemented => "The requested operation is not implemented.",
            PreconditionFailed => "A precondition of the request was not met.",
            QuotaExceeded => "A resource quota has been exceeded.",
            RequestTimeout => "The request timed out.",
            ServiceUnavailable => "The service is temporarily unavailable.",
            SlowDown => "Please slow down your request rate.",
            TokenExpired => "The requested token has expired.",
            TooLarge => "The size of your request exceeds the maximum allowed by this server.",
            TooManyRequests => "Too many requests have been received.",
            UnsupportedMediaType => "The supplied media type is not supported.",
        }
    }
}

impl fmt::Display for ApiErrorEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// JSON body accompanying a non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorResponse {
    pub error: ApiErrorEnum,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
    #[serde(default)]
    pub description: String,
}

impl ApiErrorResponse {
    pub fn from_error(error: ApiErrorEnum) -> Self {
        Self {
            error,
            message: None,
            status_code: error.status_code(),
            context: None,
            description: error.description().to_string(),
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        match &self.message {
            Some(message) => write!(f, ": {}", message),
            None if !self.description.is_empty() => write!(f, ": {}", self.description),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_parses() {
        let body = r#"{
            "Error": "NotFound",
            "StatusCode": 404,
            "Description": "The requested resource was not found.",
            "Context": {"GUID": "00000000-0000-0000-0000-000000000000"}
        }"#;
        let response: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error, ApiErrorEnum::NotFound);
        assert_eq!(response.status_code, 404);
        assert!(response.context.is_some());
        assert_eq!(response.to_string(), "NotFound: The requested resource was not found.");
    }

    #[test]
    fn test_from_error() {
        let response = ApiErrorResponse::from_error(ApiErrorEnum::Conflict);
        assert_eq!(response.status_code, 409);
        assert_eq!(response.description, ApiErrorEnum::Conflict.description());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["Error"], "Conflict");
    }

    #[test]
    fn test_unknown_error_rejected() {
        assert!(serde_json::from_str::<ApiErrorEnum>("\"Exploded\"").is_err());
    }
}
