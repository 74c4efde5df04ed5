//! Field type inference over a merged sample document
//!
//! Walks the representative document produced by
//! [`merge_samples`](crate::samples::merge_samples) and emits one field
//! definition per key. Nested objects become `group` definitions; leaves
//! get a type tag inferred from the observed value.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::samples::merge_samples;
use crate::types::{FieldDef, FieldType};

/// Infer field definitions from a merged sample document.
///
/// The document must be a JSON object; each top-level key yields one
/// definition, nested objects recurse into groups.
pub fn infer_fields(merged: &Value) -> Result<Vec<FieldDef>> {
    let map = merged.as_object().ok_or(FieldsError::NotAnObject)?;
    let fields: Vec<FieldDef> = map
        .iter()
        .map(|(name, value)| field_for(name, value))
        .collect();

    debug!(count = fields.len(), "inferred fields from merged document");
    Ok(fields)
}

/// Merge a non-empty batch of samples and infer field definitions.
pub fn infer_from_samples(samples: &[Value]) -> Result<Vec<FieldDef>> {
    if samples.is_empty() {
        return Err(FieldsError::NoSamples);
    }
    infer_fields(&merge_samples(samples))
}

fn field_for(name: &str, value: &Value) -> FieldDef {
    match value {
        Value::Object(map) if map.is_empty() => FieldDef::leaf(name, FieldType::Object),
        Value::Object(map) => FieldDef::group(
            name,
            map.iter().map(|(k, v)| field_for(k, v)).collect(),
        ),
        Value::Array(items) => match items.first() {
            Some(representative) => field_for(name, representative),
            None => FieldDef::leaf(name, FieldType::Keyword),
        },
        Value::String(s) => FieldDef::leaf(name, infer_string_type(s)),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                FieldDef::leaf(name, FieldType::Long)
            } else {
                FieldDef::leaf(name, FieldType::Double)
            }
        }
        Value::Bool(_) => FieldDef::leaf(name, FieldType::Boolean),
        Value::Null => FieldDef::leaf(name, FieldType::Keyword),
    }
}

/// Strings that parse as timestamps become `date` fields.
fn infer_string_type(s: &str) -> FieldType {
    if looks_like_timestamp(s) {
        FieldType::Date
    } else {
        FieldType::Keyword
    }
}

fn looks_like_timestamp(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(fields: &[FieldDef], name: &str) -> FieldDef {
        fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("missing field {name}"))
            .clone()
    }

    #[test]
    fn infers_scalar_types() {
        let merged = json!({
            "message": "hello",
            "count": 3,
            "ratio": 0.5,
            "ok": true,
            "missing": null,
        });
        let fields = infer_fields(&merged).unwrap();
        assert_eq!(fields.len(), 5);
        assert_eq!(named(&fields, "message").type_, FieldType::Keyword);
        assert_eq!(named(&fields, "count").type_, FieldType::Long);
        assert_eq!(named(&fields, "ratio").type_, FieldType::Double);
        assert_eq!(named(&fields, "ok").type_, FieldType::Boolean);
        assert_eq!(named(&fields, "missing").type_, FieldType::Keyword);
    }

    #[test]
    fn infers_date_from_timestamps() {
        let merged = json!({
            "@timestamp": "2024-05-17T08:00:12Z",
            "local": "2024-05-17 08:00:12",
            "day": "2024-05-17",
            "not_a_date": "hello 2024",
        });
        let fields = infer_fields(&merged).unwrap();
        assert_eq!(named(&fields, "@timestamp").type_, FieldType::Date);
        assert_eq!(named(&fields, "local").type_, FieldType::Date);
        assert_eq!(named(&fields, "day").type_, FieldType::Date);
        assert_eq!(named(&fields, "not_a_date").type_, FieldType::Keyword);
    }

    #[test]
    fn nested_objects_become_groups() {
        let merged = json!({"source": {"ip": "10.0.0.1", "port": 443}});
        let fields = infer_fields(&merged).unwrap();
        let source = named(&fields, "source");
        assert_eq!(source.type_, FieldType::Group);
        let children = source.fields.unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn empty_object_becomes_object_leaf() {
        let fields = infer_fields(&json!({"labels": {}})).unwrap();
        assert_eq!(named(&fields, "labels").type_, FieldType::Object);
        assert!(named(&fields, "labels").fields.is_none());
    }

    #[test]
    fn arrays_infer_from_representative_element() {
        let fields = infer_fields(&json!({"tags": ["a"], "empty": []})).unwrap();
        assert_eq!(named(&fields, "tags").type_, FieldType::Keyword);
        assert_eq!(named(&fields, "empty").type_, FieldType::Keyword);
    }

    #[test]
    fn non_object_document_is_an_error() {
        assert!(matches!(
            infer_fields(&json!([1, 2])),
            Err(FieldsError::NotAnObject)
        ));
        assert!(matches!(
            infer_fields(&json!("plain")),
            Err(FieldsError::NotAnObject)
        ));
    }

    #[test]
    fn shared_key_across_samples_emits_one_field() {
        let samples = vec![
            json!({"message": "a", "count": 1}),
            json!({"message": "b"}),
        ];
        let fields = infer_from_samples(&samples).unwrap();
        let messages: Vec<_> = fields.iter().filter(|f| f.name == "message").collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].type_, FieldType::Keyword);
    }

    #[test]
    fn first_observed_type_wins_on_conflict() {
        let samples = vec![json!({"pid": 42}), json!({"pid": "42"})];
        let fields = infer_from_samples(&samples).unwrap();
        assert_eq!(named(&fields, "pid").type_, FieldType::Long);

        let samples = vec![json!({"pid": "42x"}), json!({"pid": 42})];
        let fields = infer_from_samples(&samples).unwrap();
        assert_eq!(named(&fields, "pid").type_, FieldType::Keyword);
    }

    #[test]
    fn empty_sample_batch_is_an_error() {
        assert!(matches!(
            infer_from_samples(&[]),
            Err(FieldsError::NoSamples)
        ));
    }
}
