//! View SDK: client library for the View platform REST API
//!
//! Provides typed records for every View resource (tenants, storage, collections,
//! rules, repositories, webhooks, crawlers, models) and a method group per
//! resource that calls the REST API.
//!
//! - **`RestClient`**: generic verbs (create, retrieve, update, delete, exists,
//!   enumerate) that every method group is built on.
//! - **`RemoteClient`**: the reqwest implementation with bearer authentication.
//! - **`ViewSdk`**: entry point exposing one accessor per resource.
//! - **`filter`**: search conditions with a local evaluator.
//!
//! Non-success responses come back as `None` / `false` and are logged through
//! `tracing`. Set `SdkConfig::strict` to receive them as `ViewError::Api`.
//!
//! # Quick Start
//!
//! ```no_run
//! use view_sdk::{BucketCategory, BucketMetadata, SdkConfig, ViewSdk};
//! use uuid::Uuid;
//!
//! # async fn run() -> view_sdk::ViewResult<()> {
//! let tenant = Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap();
//! let sdk = ViewSdk::new(SdkConfig::new("http://localhost:8000", tenant, "default"))?;
//!
//! let pool = Uuid::new_v4();
//! let bucket = BucketMetadata::new("documents", pool, BucketCategory::Data);
//! if let Some(created) = sdk.buckets().create(&bucket).await? {
//!     println!("created bucket {}", created.guid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod methods;
pub mod models;
pub mod remote;
pub mod sdk;
pub mod url;
pub mod validate;

// ============================================================
// Core SDK types
// ============================================================

pub use client::{RawResponse, RequestBody, RestClient};
pub use config::SdkConfig;
pub use error::{ViewError, ViewResult};
pub use methods::{DocumentMethods, ObjectMethods, ReadOnlyMethods, ResourceMethods};
pub use remote::RemoteClient;
pub use sdk::ViewSdk;
pub use validate::Validate;

// ============================================================
// Search filters
// ============================================================

pub use filter::{evaluate, FieldValue, SchemaFilter, SearchCondition, SearchFilter};

// ============================================================
// Data models
// ============================================================

pub use models::*;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
