//! Error types for the ropsdoc-core library, one enum per concern.

use std::fmt;

use thiserror::Error;

pub use ropsdoc_backend::BackendError;

/// Pipeline step that talked to a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Identity-document recognition.
    IdRecognition,
    /// Handwritten text recognition.
    TextRecognition,
    /// Transcript cleanup completion.
    Cleaning,
    /// Field-extraction completion.
    FieldExtraction,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::IdRecognition => "ID document recognition",
            Stage::TextRecognition => "text recognition",
            Stage::Cleaning => "text cleaning",
            Stage::FieldExtraction => "field extraction",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the extraction pipelines.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A backend call failed.
    #[error("{stage} failed: {source}")]
    Backend {
        stage: Stage,
        #[source]
        source: BackendError,
    },

    /// Completion output is not wrapped in `{` ... `}` after normalization.
    #[error("completion response is not a JSON object: {content:?}")]
    Shape { content: String },

    /// Completion output looked like JSON but did not parse.
    #[error("failed to parse completion JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ExtractionError {
    pub fn backend(stage: Stage, source: BackendError) -> Self {
        ExtractionError::Backend { stage, source }
    }
}

/// Caller-side validation of an extracted identity.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// No personal numeric code was found.
    #[error("personal number (CNP) not found")]
    MissingNationalId,

    /// The personal numeric code failed the format or checksum test.
    #[error("invalid CNP: {0}")]
    InvalidNationalId(String),
}

/// Errors related to preparing uploaded files.
#[derive(Error, Debug)]
pub enum InputError {
    /// Decoded fine, but the format is not on the allow-list.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Not a readable image.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// Re-encoding the resized image failed.
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    /// The input file could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Could not create the database directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
