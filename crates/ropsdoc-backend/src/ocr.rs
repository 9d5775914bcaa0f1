//! Document analysis types returned by OCR backends.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prebuilt recognition model to run against a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrModel {
    /// Identity-document model (ID cards, passports, driver licenses).
    Identity,
    /// General printed and handwritten text model.
    Text,
}

impl OcrModel {
    /// Backend model identifier.
    pub fn model_id(&self) -> &'static str {
        match self {
            OcrModel::Identity => "prebuilt-idDocument",
            OcrModel::Text => "prebuilt-read",
        }
    }
}

impl fmt::Display for OcrModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_id())
    }
}

/// Result of a completed analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Model that produced this result.
    #[serde(default)]
    pub model_id: String,

    /// Full document text as seen by the backend.
    #[serde(default)]
    pub content: String,

    /// Pages in document order.
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Recognized typed documents (identity model only).
    #[serde(default)]
    pub documents: Vec<AnalyzedDocument>,
}

/// A single page of recognized text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    #[serde(default)]
    pub page_number: u32,

    /// Text lines in reading order.
    #[serde(default)]
    pub lines: Vec<Line>,
}

/// A recognized line of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    pub content: String,
}

impl Line {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A typed document recognized by a prebuilt model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedDocument {
    /// Document type, e.g. `idDocument.nationalIdentityCard`.
    #[serde(default)]
    pub doc_type: String,

    /// Extracted fields keyed by backend field name.
    #[serde(default)]
    pub fields: HashMap<String, RawField>,

    /// Document-level confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

static ABSENT: RawField = RawField::Absent;

impl AnalyzedDocument {
    /// Look up a field by backend name, `RawField::Absent` when missing.
    pub fn field(&self, name: &str) -> &RawField {
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    /// Builder-style helper used by test doubles.
    pub fn with_field(mut self, name: impl Into<String>, field: RawField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// A field as returned by the backend.
///
/// The backend emits structured field objects (always tagged with `type`),
/// but cached or hand-built results may carry a plain `{"value": ...}`
/// mapping instead. JSON `null` deserializes to `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Object(DocumentField),
    #[default]
    Absent,
    Mapping(Map<String, Value>),
}

/// Structured field object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentField {
    /// Field value type (`string`, `date`, `countryRegion`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<String>,

    /// Raw text span the value was read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl DocumentField {
    /// A string-typed field with the given value.
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind: "string".to_string(),
            content: Some(value.clone()),
            value_string: Some(value),
            ..Default::default()
        }
    }

    /// Typed value of the field, if the backend produced one.
    pub fn value(&self) -> Option<&str> {
        self.value_string
            .as_deref()
            .or(self.value_date.as_deref())
    }
}
