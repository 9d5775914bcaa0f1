//! Identity and transcript records produced by the extraction pipelines.

use serde::{Deserialize, Serialize};

/// Personal data extracted from a document.
///
/// `national_id` is digit-only when it comes from an identity card, but it
/// is not guaranteed to pass the CNP checksum; see
/// [`validate_identity`](crate::validation::validate_identity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIdentity {
    pub first_name: String,

    pub last_name: String,

    /// Personal numeric code (CNP).
    #[serde(rename = "cnp")]
    pub national_id: String,
}

impl ExtractedIdentity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
        }
    }

    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty() && self.national_id.is_empty()
    }
}

/// Output of the handwritten document pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandwrittenResult {
    /// OCR text after completion-based cleanup.
    pub transcript: String,

    /// Summary in the configured target language.
    pub summary: String,

    /// Identity fields mentioned in the document.
    #[serde(flatten)]
    pub identity: ExtractedIdentity,
}

/// JSON object the field-extraction completion must return.
///
/// Missing keys default to empty strings and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldCompletionEnvelope {
    pub summary: String,
    pub first_name: String,
    pub last_name: String,
    pub cnp: String,
}

impl FieldCompletionEnvelope {
    /// Split into summary and trimmed identity.
    pub fn into_parts(self) -> (String, ExtractedIdentity) {
        let identity = ExtractedIdentity::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.cnp.trim(),
        );
        (self.summary.trim().to_string(), identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_serializes_cnp_key() {
        let identity = ExtractedIdentity::new("Ion", "Popescu", "1900101220034");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["cnp"], "1900101220034");
        assert!(json.get("national_id").is_none());
    }

    #[test]
    fn test_handwritten_result_is_flat() {
        let result = HandwrittenResult {
            transcript: "t".to_string(),
            summary: "s".to_string(),
            identity: ExtractedIdentity::new("A", "B", ""),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["first_name"], "A");
        assert_eq!(json["transcript"], "t");
    }

    #[test]
    fn test_envelope_defaults_and_extra_keys() {
        let envelope: FieldCompletionEnvelope =
            serde_json::from_str(r#"{"summary": " s ", "first_name": "A", "age": 40}"#).unwrap();
        let (summary, identity) = envelope.into_parts();
        assert_eq!(summary, "s");
        assert_eq!(identity, ExtractedIdentity::new("A", "", ""));
    }

    #[test]
    fn test_envelope_rejects_non_string_values() {
        let result = serde_json::from_str::<FieldCompletionEnvelope>(r#"{"cnp": 1900101220034}"#);
        assert!(result.is_err());
    }
}
