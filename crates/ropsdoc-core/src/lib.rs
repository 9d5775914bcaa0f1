//! Core library for Romanian identity document intake.
//!
//! This crate provides:
//! - CNP (personal numeric code) checksum validation
//! - ID card field extraction through an OCR identity model
//! - Handwritten document transcription, cleanup and field extraction
//!   through an OCR text model and a chat completion model
//! - Upload preparation (PDF passthrough, image downscaling)
//! - SQLite persistence of validated results

pub mod error;
pub mod extract;
pub mod input;
pub mod models;
pub mod rules;
pub mod store;
pub mod validation;

pub use error::{ExtractionError, InputError, Stage, StoreError, ValidationError};
pub use extract::{HandwrittenPipeline, IdDocumentExtractor};
pub use input::{prepare_document, prepare_file};
pub use models::config::{ExtractionConfig, InputConfig, RopsConfig, StoreConfig};
pub use models::identity::{ExtractedIdentity, HandwrittenResult};
pub use rules::{digits_only, is_valid_cnp, strip_fencing};
pub use store::{RecordStore, SqliteStore};
pub use validation::{NationalIdPolicy, validate_identity};

/// Re-export backend types.
pub use ropsdoc_backend::{
    BackendError, CompletionBackend, DocumentIntelligenceConfig, OcrBackend, OpenAiConfig,
    SamplingParams,
};

#[cfg(feature = "azure")]
pub use ropsdoc_backend::{AzureDocumentBackend, AzureOpenAiBackend};
