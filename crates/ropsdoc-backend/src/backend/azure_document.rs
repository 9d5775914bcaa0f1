//! Azure Document Intelligence backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::DocumentIntelligenceConfig;
use crate::error::BackendError;
use crate::{AnalyzeResult, OcrBackend, OcrModel, Result};

use super::ensure_success;

const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION: &str = "Operation-Location";

/// OCR backend using the Document Intelligence REST API.
///
/// Analysis is a long-running operation: the document is submitted, then the
/// returned operation URL is polled until it succeeds, fails, or the poll
/// budget runs out.
pub struct AzureDocumentBackend {
    client: reqwest::Client,
    config: DocumentIntelligenceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOperation {
    status: OperationStatus,
    #[serde(default)]
    analyze_result: Option<AnalyzeResult>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl AzureDocumentBackend {
    /// Create a backend from connection settings.
    pub fn new(config: DocumentIntelligenceConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(BackendError::Config(
                "document intelligence endpoint is not set".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(BackendError::Config(
                "document intelligence key is not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn analyze_url(&self, model: OcrModel) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            model.model_id(),
            self.config.api_version
        )
    }

    async fn submit(&self, document: &[u8], model: OcrModel) -> Result<String> {
        let url = self.analyze_url(model);
        info!(model = %model, bytes = document.len(), "submitting document for analysis");

        let resp = self
            .client
            .post(&url)
            .header(KEY_HEADER, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(document.to_vec())
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        resp.headers()
            .get(OPERATION_LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                BackendError::Malformed(format!("analyze response has no {} header", OPERATION_LOCATION))
            })
    }

    async fn poll(&self, operation_url: &str) -> Result<AnalyzeResult> {
        let interval = Duration::from_millis(self.config.poll_interval_ms);

        for attempt in 1..=self.config.max_polls {
            tokio::time::sleep(interval).await;

            let resp = self
                .client
                .get(operation_url)
                .header(KEY_HEADER, &self.config.api_key)
                .send()
                .await?;
            let resp = ensure_success(resp).await?;
            let operation: AnalyzeOperation = resp.json().await?;

            match operation.status {
                OperationStatus::Succeeded => {
                    debug!(attempt, "analysis succeeded");
                    return operation.analyze_result.ok_or_else(|| {
                        BackendError::Malformed("succeeded analysis has no analyzeResult".to_string())
                    });
                }
                OperationStatus::Failed => return Err(operation_failure(operation.error)),
                status => debug!(attempt, ?status, "analysis still running"),
            }
        }

        Err(BackendError::Timeout(format!(
            "analysis did not finish after {} polls",
            self.config.max_polls
        )))
    }
}

fn operation_failure(error: Option<ApiError>) -> BackendError {
    match error {
        Some(e) if !e.message.is_empty() => BackendError::Operation(format!("{}: {}", e.code, e.message)),
        _ => BackendError::Operation("analysis failed".to_string()),
    }
}

#[async_trait]
impl OcrBackend for AzureDocumentBackend {
    async fn analyze(&self, document: &[u8], model: OcrModel) -> Result<AnalyzeResult> {
        let operation_url = self.submit(document, model).await?;
        debug!(url = %operation_url, "polling analysis");
        self.poll(&operation_url).await
    }
}
