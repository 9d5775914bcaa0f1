//! Backend trait definitions and implementations.

#[cfg(feature = "azure")]
pub mod azure_document;

#[cfg(feature = "azure")]
pub mod azure_openai;

#[cfg(all(test, feature = "azure"))]
pub(crate) mod stub;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{AnalyzeResult, ChatMessage, Completion, OcrModel, Result, SamplingParams};

/// Trait for OCR / document analysis backends.
///
/// Implementations submit the document, wait for the analysis to finish and
/// return the completed result. Failures of any kind are reported as
/// `BackendError`; retries are left to the caller.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Analyze `document` with the given prebuilt model.
    async fn analyze(&self, document: &[u8], model: OcrModel) -> Result<AnalyzeResult>;
}

/// Trait for chat-completion backends.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run a non-streaming completion over `messages`.
    async fn complete(&self, messages: &[ChatMessage], params: &SamplingParams)
        -> Result<Completion>;
}

/// Placeholder body for an error response that could not be read.
#[cfg(feature = "azure")]
pub(crate) const UNREADABLE_BODY: &str = "<unreadable body>";

/// Turn a non-success HTTP status into `BackendError::Status`.
#[cfg(feature = "azure")]
pub(crate) async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read {} response body: {}", status, e);
            UNREADABLE_BODY.to_string()
        }
    };
    Err(crate::BackendError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl<T: OcrBackend + ?Sized> OcrBackend for Arc<T> {
    async fn analyze(&self, document: &[u8], model: OcrModel) -> Result<AnalyzeResult> {
        (**self).analyze(document, model).await
    }
}

#[async_trait]
impl<T: CompletionBackend + ?Sized> CompletionBackend for Arc<T> {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<Completion> {
        (**self).complete(messages, params).await
    }
}
