//! Model endpoints, configurations and profiles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;
use crate::error::{ViewError, ViewResult};
use crate::validate::{require_min, require_non_empty, require_range, Validate};

/// Wire protocol spoken by a model endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelApiType {
    #[default]
    #[serde(rename = "Ollama")]
    Ollama,
    #[serde(rename = "OpenAI")]
    OpenAi,
    #[serde(rename = "vLLM")]
    Vllm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelEndpoint {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub endpoint_url: String,
    pub bearer_token: Option<String>,
    pub api_type: ModelApiType,
    pub timeout_ms: i32,
    pub additional_data: Option<String>,
    pub active: bool,
    pub created_utc: DateTime<Utc>,
}

impl ModelEndpoint {
    pub fn new(name: &str, endpoint_url: &str, api_type: ModelApiType) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            endpoint_url: endpoint_url.to_string(),
            api_type,
            timeout_ms: 30_000,
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for ModelEndpoint {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("EndpointUrl", &self.endpoint_url)?;
        require_min("TimeoutMs", self.timeout_ms, 1)
    }
}

impl Resource for ModelEndpoint {
    const PATH: &'static str = "modelendpoints";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Generation parameters for a named model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelConfiguration {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub model_name: String,
    pub context_size: i32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: i32,
    pub repetition_penalty: f64,
    pub max_output_tokens: i32,
    pub enable_embeddings: bool,
    pub enable_completions: bool,
    pub active: bool,
    pub created_utc: DateTime<Utc>,
}

impl ModelConfiguration {
    pub fn new(name: &str, model_name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            model_name: model_name.to_string(),
            context_size: 4096,
            temperature: 0.2,
            top_p: 1.0,
            top_k: 40,
            repetition_penalty: 1.1,
            max_output_tokens: 1024,
            enable_completions: true,
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for ModelConfiguration {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("ModelName", &self.model_name)?;
        require_min("ContextSize", self.context_size, 1)?;
        require_range("Temperature", self.temperature, 0.0, 2.0)?;
        require_range("TopP", self.top_p, 0.0, 1.0)?;
        require_min("TopK", self.top_k, 1)?;
        require_min("RepetitionPenalty", self.repetition_penalty, 0.0)?;
        require_range("MaxOutputTokens", self.max_output_tokens, 1, self.context_size)
    }
}

impl Resource for ModelConfiguration {
    const PATH: &'static str = "modelconfigs";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// Pairs an endpoint with a configuration and a system prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelProfile {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    #[serde(rename = "ModelEndpointGUID")]
    pub model_endpoint_guid: Uuid,
    #[serde(rename = "ModelConfigurationGUID")]
    pub model_configuration_guid: Uuid,
    pub system_prompt: Option<String>,
    pub active: bool,
    pub created_utc: DateTime<Utc>,
}

impl ModelProfile {
    pub fn new(name: &str, model_endpoint_guid: Uuid, model_configuration_guid: Uuid) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            model_endpoint_guid,
            model_configuration_guid,
            active: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for ModelProfile {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)?;
        if self.model_endpoint_guid.is_nil() {
            return Err(ViewError::invalid("ModelEndpointGUID must be set"));
        }
        if self.model_configuration_guid.is_nil() {
            return Err(ViewError::invalid("ModelConfigurationGUID must be set"));
        }
        Ok(())
    }
}

impl Resource for ModelProfile {
    const PATH: &'static str = "modelprofiles";

    fn guid(&self) -> Uuid {
        self.guid
    }
}
