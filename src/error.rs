//! Error types for the View SDK

use thiserror::Error;

use crate::models::ApiErrorResponse;

/// Errors that can occur when using the View SDK
#[derive(Error, Debug)]
pub enum ViewError {
    /// A required argument was missing, empty or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// SDK configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-success response, only raised when the client runs in strict mode
    #[error("API error: status {status}{}", response.as_ref().map(|r| format!(" ({})", r)).unwrap_or_default())]
    Api {
        status: u16,
        response: Option<ApiErrorResponse>,
    },
}

impl ViewError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ViewError::InvalidArgument(msg.into())
    }
}

pub type ViewResult<T> = Result<T, ViewError>;
