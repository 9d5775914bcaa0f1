//! Handwritten document pipeline: OCR, completion cleanup, field extraction.

use ropsdoc_backend::{
    AnalyzeResult, ChatMessage, CompletionBackend, OcrBackend, OcrModel, SamplingParams,
};
use tracing::{debug, error, info, warn};

use crate::error::{ExtractionError, Stage};
use crate::models::identity::{ExtractedIdentity, FieldCompletionEnvelope, HandwrittenResult};
use crate::rules::strip_fencing;

use super::Result;
use super::prompts::{clean_messages, extract_messages};

/// Turns a handwritten document into a cleaned transcript, a summary and
/// the identity fields it mentions.
///
/// Stages run strictly in sequence, each feeding the next:
/// 1. text recognition with the OCR text model
/// 2. transcript cleanup through the completion backend
/// 3. summary and field extraction as a JSON object
pub struct HandwrittenPipeline<O, C> {
    ocr: O,
    completion: C,
    sampling: SamplingParams,
    summary_language: String,
}

impl<O, C> HandwrittenPipeline<O, C>
where
    O: OcrBackend,
    C: CompletionBackend,
{
    /// Create a pipeline with default sampling and a Romanian summary.
    pub fn new(ocr: O, completion: C) -> Self {
        Self {
            ocr,
            completion,
            sampling: SamplingParams::default(),
            summary_language: "Romanian".to_string(),
        }
    }

    /// Set the sampling parameters for both completion calls.
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the language the summary is written in.
    pub fn with_summary_language(mut self, language: impl Into<String>) -> Self {
        self.summary_language = language.into();
        self
    }

    /// Run all stages over `document`.
    pub async fn process(&self, document: &[u8]) -> Result<HandwrittenResult> {
        info!("Processing handwritten document ({} bytes)", document.len());

        let result = self.run(document).await;
        if let Err(e) = &result {
            error!("Error in handwritten document pipeline: {}", e);
        }
        result
    }

    async fn run(&self, document: &[u8]) -> Result<HandwrittenResult> {
        let raw_text = self.recognize(document).await?;
        let transcript = self.clean(&raw_text).await?;
        let (summary, identity) = self.extract_fields(&transcript).await?;

        Ok(HandwrittenResult {
            transcript,
            summary,
            identity,
        })
    }

    async fn recognize(&self, document: &[u8]) -> Result<String> {
        let result = self
            .ocr
            .analyze(document, OcrModel::Text)
            .await
            .map_err(|e| ExtractionError::backend(Stage::TextRecognition, e))?;

        let text = join_lines(&result);
        if text.trim().is_empty() {
            warn!("No text recognized in handwritten document");
        }
        debug!("OCR extracted text: {}", text);
        Ok(text)
    }

    async fn clean(&self, raw_text: &str) -> Result<String> {
        let content = self
            .ask(Stage::Cleaning, &clean_messages(raw_text))
            .await?;

        let cleaned = strip_fencing(&content);
        debug!("Cleaned text: {}", cleaned);
        Ok(cleaned)
    }

    async fn extract_fields(&self, transcript: &str) -> Result<(String, ExtractedIdentity)> {
        let content = self
            .ask(
                Stage::FieldExtraction,
                &extract_messages(transcript, &self.summary_language),
            )
            .await?;

        Ok(parse_envelope(&content)?.into_parts())
    }

    async fn ask(&self, stage: Stage, messages: &[ChatMessage]) -> Result<String> {
        let completion = self
            .completion
            .complete(messages, &self.sampling)
            .await
            .map_err(|e| ExtractionError::backend(stage, e))?;

        let content = completion
            .first_content()
            .map_err(|e| ExtractionError::backend(stage, e))?
            .trim()
            .to_string();

        debug!("{} completion: {}", stage, content);
        Ok(content)
    }
}

/// Join every recognized line of every page, in order, with newlines.
pub fn join_lines(result: &AnalyzeResult) -> String {
    result
        .pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize a field-extraction completion and parse it.
///
/// Content that is not wrapped in braces after fence removal is rejected
/// as `Shape` before any parse is attempted.
pub fn parse_envelope(content: &str) -> Result<FieldCompletionEnvelope> {
    let normalized = strip_fencing(content);

    if !(normalized.starts_with('{') && normalized.ends_with('}')) {
        return Err(ExtractionError::Shape {
            content: normalized,
        });
    }

    Ok(serde_json::from_str(&normalized)?)
}
