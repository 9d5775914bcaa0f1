//! Azure OpenAI chat-completion backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::OpenAiConfig;
use crate::error::BackendError;
use crate::{ChatMessage, Completion, CompletionBackend, Result, SamplingParams};

use super::ensure_success;

const KEY_HEADER: &str = "api-key";

/// Completion backend calling a chat deployment on Azure OpenAI.
pub struct AzureOpenAiBackend {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    params: &'a SamplingParams,
    stream: bool,
}

impl AzureOpenAiBackend {
    /// Create a backend from connection settings.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        for (name, value) in [
            ("endpoint", &config.endpoint),
            ("key", &config.api_key),
            ("deployment", &config.deployment),
        ] {
            if value.trim().is_empty() {
                return Err(BackendError::Config(format!("OpenAI {} is not set", name)));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }
}

#[async_trait]
impl CompletionBackend for AzureOpenAiBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<Completion> {
        let request = ChatRequest {
            messages,
            params,
            stream: false,
        };

        debug!(
            deployment = %self.config.deployment,
            messages = messages.len(),
            max_tokens = params.max_tokens,
            "requesting chat completion"
        );

        let resp = self
            .client
            .post(self.completions_url())
            .header(KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let completion: Completion = resp.json().await?;
        debug!(choices = completion.choices.len(), "completion received");
        Ok(completion)
    }
}
