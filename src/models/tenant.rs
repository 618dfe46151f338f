//! Tenants, users and credentials

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_non_empty, Validate};

/// Tenant configuration and metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TenantMetadata {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "AccountGUID")]
    pub account_guid: Uuid,
    pub name: String,
    pub region: String,
    pub s3_base_domain: Option<String>,
    pub rest_base_domain: Option<String>,
    #[serde(rename = "DefaultPoolGUID")]
    pub default_pool_guid: Option<Uuid>,
    pub active: bool,
    pub is_protected: bool,
    pub created_utc: DateTime<Utc>,
}

impl TenantMetadata {
    pub fn new(name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            region: "us-west-1".to_string(),
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for TenantMetadata {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)
    }
}

impl Resource for TenantMetadata {
    const PATH: &'static str = "tenants";
    const TENANT_SCOPED: bool = false;

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// A user within a tenant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserMaster {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub notes: Option<String>,
    pub email: String,
    pub password_sha256: Option<String>,
    pub active: bool,
    pub is_protected: bool,
    pub created_utc: DateTime<Utc>,
}

impl UserMaster {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Validate for UserMaster {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("FirstName", &self.first_name)?;
        require_non_empty("LastName", &self.last_name)?;
        require_non_empty("Email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ViewError::invalid(format!("Email is not an address: {}", self.email)));
        }
        Ok(())
    }
}

impl Resource for UserMaster {
    const PATH: &'static str = "users";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Access key / secret key pair bound to a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Credential {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "UserGUID")]
    pub user_guid: Uuid,
    pub name: String,
    pub access_key: String,
    pub secret_key: String,
    pub active: bool,
    pub is_protected: bool,
    pub created_utc: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_guid: Uuid, name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            user_guid,
            name: name.to_string(),
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for Credential {
    fn validate(&self) -> ViewResult<()> {
        if self.user_guid.is_nil() {
            return Err(ViewError::invalid("UserGUID must be set"));
        }
        Ok(())
    }
}

impl Resource for Credential {
    const PATH: &'static str = "credentials";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
