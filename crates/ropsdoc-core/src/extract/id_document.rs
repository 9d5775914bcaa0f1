//! Identity card extraction using the OCR identity model.

use ropsdoc_backend::{AnalyzeResult, OcrBackend, OcrModel};
use tracing::{debug, error, info, warn};

use crate::error::{ExtractionError, Stage};
use crate::models::identity::ExtractedIdentity;
use crate::rules::{digits_only, read_field_value};

use super::Result;

const FIRST_NAME: &str = "FirstName";
const LAST_NAME: &str = "LastName";
const PERSONAL_NUMBER: &str = "PersonalNumber";

/// Extracts name and CNP from a scanned identity card.
pub struct IdDocumentExtractor<O> {
    ocr: O,
}

impl<O: OcrBackend> IdDocumentExtractor<O> {
    pub fn new(ocr: O) -> Self {
        Self { ocr }
    }

    /// Run the identity model over `document` and map its fields.
    ///
    /// Empty fields are not an error; the returned CNP is digit-only but has
    /// not been length- or checksum-checked.
    pub async fn extract(&self, document: &[u8]) -> Result<ExtractedIdentity> {
        info!("Processing ID document ({} bytes)", document.len());

        let result = self
            .ocr
            .analyze(document, OcrModel::Identity)
            .await
            .map_err(|e| {
                let err = ExtractionError::backend(Stage::IdRecognition, e);
                error!("Error processing ID document: {}", err);
                err
            })?;

        Ok(identity_from_result(&result))
    }
}

/// Map the first recognized document onto an identity.
pub fn identity_from_result(result: &AnalyzeResult) -> ExtractedIdentity {
    let Some(document) = result.documents.first() else {
        warn!("No identity document recognized");
        return ExtractedIdentity::default();
    };

    if result.documents.len() > 1 {
        warn!(
            "{} identity documents recognized, using the first",
            result.documents.len()
        );
    }

    debug!("Document type: {}", document.doc_type);
    debug!("Document fields: {:?}", document.fields.keys().collect::<Vec<_>>());

    let personal_number = read_field_value(document.field(PERSONAL_NUMBER));

    let identity = ExtractedIdentity {
        first_name: read_field_value(document.field(FIRST_NAME)),
        last_name: read_field_value(document.field(LAST_NAME)),
        national_id: digits_only(&personal_number),
    };
    if identity.is_empty() {
        warn!("No identity fields recognized in {}", document.doc_type);
    }
    identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::testing::MockOcr;
    use pretty_assertions::assert_eq;
    use ropsdoc_backend::{AnalyzedDocument, DocumentField, RawField};
    use serde_json::json;
    use std::sync::Arc;

    fn id_card(personal_number: &str) -> AnalyzeResult {
        AnalyzeResult {
            model_id: "prebuilt-idDocument".to_string(),
            documents: vec![AnalyzedDocument::default()
                .with_field(FIRST_NAME, RawField::Object(DocumentField::string(" ION ")))
                .with_field(LAST_NAME, RawField::Object(DocumentField::string("POPESCU")))
                .with_field(
                    PERSONAL_NUMBER,
                    RawField::Object(DocumentField::string(personal_number)),
                )],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_extract_id_card() {
        let ocr = Arc::new(MockOcr::returning(id_card("1900101220034")));
        let extractor = IdDocumentExtractor::new(ocr.clone());

        let identity = extractor.extract(b"%PDF-1.7").await.unwrap();

        assert_eq!(identity, ExtractedIdentity::new("ION", "POPESCU", "1900101220034"));
        assert_eq!(ocr.calls(), vec![(8, OcrModel::Identity)]);
    }

    #[test]
    fn test_personal_number_digit_filter() {
        let identity = identity_from_result(&id_card("1 9001 01 22 003 1"));
        assert_eq!(identity.national_id, "1900101220031");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let result = AnalyzeResult {
            documents: vec![AnalyzedDocument::default().with_field(
                LAST_NAME,
                serde_json::from_value(json!({"value": "  IONESCU "})).unwrap(),
            )],
            ..Default::default()
        };

        let identity = identity_from_result(&result);
        assert_eq!(identity, ExtractedIdentity::new("", "IONESCU", ""));
    }

    #[test]
    fn test_no_documents() {
        let identity = identity_from_result(&AnalyzeResult::default());
        assert!(identity.is_empty());
    }

    #[test]
    fn test_document_without_fields() {
        let result = AnalyzeResult {
            documents: vec![AnalyzedDocument {
                doc_type: "idDocument".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(identity_from_result(&result).is_empty());
    }

    #[test]
    fn test_first_document_wins() {
        let mut result = id_card("1900101220034");
        result.documents.extend(id_card("2850215123453").documents);
        assert_eq!(identity_from_result(&result).national_id, "1900101220034");
    }

    #[tokio::test]
    async fn test_backend_failure_is_structured() {
        let extractor = IdDocumentExtractor::new(MockOcr::failing("401 access denied"));

        let err = extractor.extract(b"bytes").await.unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::Backend { stage: Stage::IdRecognition, .. }
        ));
        assert_eq!(
            err.to_string(),
            "ID document recognition failed: HTTP request failed: 401 access denied"
        );
    }
}
