//! Backend abstraction layer for ropsdoc.
//!
//! This crate defines the contracts the extraction pipelines need from their
//! external collaborators:
//! - `OcrBackend` for document analysis (identity model and text model)
//! - `CompletionBackend` for chat completions
//!
//! With the default `azure` feature it also provides HTTP implementations for
//! Azure Document Intelligence and Azure OpenAI.

mod backend;
pub mod completion;
pub mod config;
mod error;
pub mod ocr;

pub use backend::{CompletionBackend, OcrBackend};
pub use completion::{ChatMessage, Choice, Completion, CompletionMessage, Role, SamplingParams};
pub use config::{DocumentIntelligenceConfig, OpenAiConfig};
pub use error::BackendError;
pub use ocr::{AnalyzeResult, AnalyzedDocument, DocumentField, Line, OcrModel, Page, RawField};

#[cfg(feature = "azure")]
pub use backend::azure_document::AzureDocumentBackend;

#[cfg(feature = "azure")]
pub use backend::azure_openai::AzureOpenAiBackend;

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
