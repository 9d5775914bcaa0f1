//! Connection settings for the Azure backends.

use serde::{Deserialize, Serialize};

use crate::SamplingParams;

/// Azure Document Intelligence (Form Recognizer) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentIntelligenceConfig {
    /// Resource endpoint, e.g. `https://<name>.cognitiveservices.azure.com`.
    pub endpoint: String,

    /// Subscription key.
    pub api_key: String,

    /// REST API version.
    pub api_version: String,

    /// Delay between polls of a running analysis.
    pub poll_interval_ms: u64,

    /// Maximum number of polls before giving up.
    pub max_polls: u32,

    /// Per-request timeout.
    pub request_timeout_secs: u64,
}

impl Default for DocumentIntelligenceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            api_version: "2023-07-31".to_string(),
            poll_interval_ms: 1000,
            max_polls: 120,
            request_timeout_secs: 60,
        }
    }
}

/// Azure OpenAI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Resource endpoint, e.g. `https://<name>.openai.azure.com`.
    pub endpoint: String,

    pub api_key: String,

    /// Deployment name of the chat model.
    pub deployment: String,

    pub api_version: String,

    pub request_timeout_secs: u64,

    /// Sampling parameters used for every request.
    pub sampling: SamplingParams,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            deployment: String::new(),
            api_version: "2024-05-01-preview".to_string(),
            request_timeout_secs: 60,
            sampling: SamplingParams::default(),
        }
    }
}
