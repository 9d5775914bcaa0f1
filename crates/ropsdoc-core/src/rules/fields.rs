//! Reading values out of OCR backend fields.

use ropsdoc_backend::RawField;
use serde_json::Value;

/// Extract the trimmed value of a backend field.
///
/// Missing fields, missing values and empty values all read as `""`;
/// optional document fields are routinely absent.
pub fn read_field_value(field: &RawField) -> String {
    match field {
        RawField::Absent => String::new(),
        RawField::Mapping(map) => match map.get("value") {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => String::new(),
        },
        RawField::Object(field) => field.value().map(str::trim).unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropsdoc_backend::DocumentField;
    use serde_json::json;

    fn mapping(value: Value) -> RawField {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent() {
        assert_eq!(read_field_value(&RawField::Absent), "");
    }

    #[test]
    fn test_mapping_value_trimmed() {
        assert_eq!(read_field_value(&mapping(json!({"value": "  X "}))), "X");
    }

    #[test]
    fn test_mapping_empty_or_missing() {
        assert_eq!(read_field_value(&mapping(json!({"value": ""}))), "");
        assert_eq!(read_field_value(&mapping(json!({"value": null}))), "");
        assert_eq!(read_field_value(&mapping(json!({"content": "X"}))), "");
        assert_eq!(read_field_value(&mapping(json!({}))), "");
    }

    #[test]
    fn test_mapping_non_string_values() {
        assert_eq!(read_field_value(&mapping(json!({"value": 42}))), "");
        assert_eq!(read_field_value(&mapping(json!({"value": ["X"]}))), "");
    }

    #[test]
    fn test_object_value() {
        let field = RawField::Object(DocumentField::string(" POPESCU\n"));
        assert_eq!(read_field_value(&field), "POPESCU");
    }

    #[test]
    fn test_object_without_value() {
        let field = RawField::Object(DocumentField {
            kind: "string".to_string(),
            content: Some("ION".to_string()),
            ..Default::default()
        });
        assert_eq!(read_field_value(&field), "");
    }
}
