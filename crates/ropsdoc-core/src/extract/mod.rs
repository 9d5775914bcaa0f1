//! Extraction pipelines for identity cards and handwritten documents.

mod handwritten;
mod id_document;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testing;

pub use handwritten::{HandwrittenPipeline, join_lines, parse_envelope};
pub use id_document::{IdDocumentExtractor, identity_from_result};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
